use super::*;
use crate::Reward;
use crate::random::Entropy;

/// Upper confidence bound with a variance-scaled bonus.
///
/// index(a) = mean(a) + sqrt(8 · var · ln t / plays(a))
#[derive(Debug, Clone, Copy)]
pub struct Ucb {
    variance: Reward,
}

impl From<Reward> for Ucb {
    fn from(noise: Reward) -> Self {
        Self {
            variance: variance(noise),
        }
    }
}

impl Strategy for Ucb {
    fn choose(&self, stats: &ArmStatistics, rng: &mut Entropy) -> Choice {
        let log = (stats.t() as Reward).ln();
        let index = stats
            .means()
            .iter()
            .zip(stats.plays())
            .map(|(m, &n)| m + (crate::UCB_SCALE * self.variance * log / n as Reward).sqrt())
            .collect::<Vec<_>>();
        let arm = argmax(&index, rng);
        Choice::against(arm, &maximizers(stats.means()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(rewards: &[(usize, Reward)], arms: usize) -> ArmStatistics {
        let mut stats = ArmStatistics::new(arms);
        for &(arm, reward) in rewards {
            stats.tick();
            stats.observe(arm, reward);
        }
        stats.tick();
        stats
    }

    #[test]
    fn prefers_undersampled_arm_with_equal_means() {
        let stats = played(&[(0, 0.5), (1, 0.5), (0, 0.5), (0, 0.5)], 2);
        let choice = Ucb::from(0.).choose(&stats, &mut Entropy::seeded(0));
        assert_eq!(choice.arm, 1);
        assert!(!choice.exploring, "both arms are greedy maximizers");
    }

    #[test]
    fn bonus_flags_exploration() {
        let stats = played(&[(0, 1.0), (1, 0.9), (0, 1.0), (0, 1.0), (0, 1.0)], 2);
        let choice = Ucb::from(0.).choose(&stats, &mut Entropy::seeded(0));
        assert_eq!(choice.arm, 1);
        assert!(choice.exploring);
    }

    #[test]
    fn exploits_dominant_arm() {
        let mut rewards = vec![(0, 1.0), (1, 0.0)];
        rewards.extend(std::iter::repeat((0, 1.0)).take(40));
        rewards.extend(std::iter::repeat((1, 0.0)).take(40));
        let stats = played(&rewards, 2);
        let choice = Ucb::from(0.).choose(&stats, &mut Entropy::seeded(0));
        assert_eq!(choice, Choice { arm: 0, exploring: false });
    }
}
