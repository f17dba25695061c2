use super::*;
use crate::Reward;
use crate::random::Entropy;

/// Gaussian surrogate of KL-UCB.
///
/// f(t)     = 2 · var · (ln t + c · ln ln t)
/// index(a) = sums(a)/plays(a) + sqrt(f(t) / plays(a))
#[derive(Debug, Clone, Copy)]
pub struct KlUcb {
    variance: Reward,
}

impl From<Reward> for KlUcb {
    fn from(noise: Reward) -> Self {
        Self {
            variance: variance(noise),
        }
    }
}

impl KlUcb {
    /// exploration budget, clamped at zero where ln ln t < 0
    pub fn budget(&self, t: usize) -> Reward {
        let log = (t as Reward).ln();
        (2. * self.variance * (log + crate::KLUCB_C * log.ln())).max(0.)
    }
}

impl Strategy for KlUcb {
    fn choose(&self, stats: &ArmStatistics, rng: &mut Entropy) -> Choice {
        let budget = self.budget(stats.t());
        let means = safe_divide(stats.sums(), stats.plays());
        let index = means
            .iter()
            .zip(stats.plays())
            .map(|(m, &n)| m + (budget / n as Reward).sqrt())
            .collect::<Vec<_>>();
        let arm = argmax(&index, rng);
        Choice::against(arm, &maximizers(stats.means()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_matches_formula() {
        let policy = KlUcb::from(0.);
        let t = 10usize;
        let expected = 2. * 0.25 * ((t as Reward).ln() + 3. * (t as Reward).ln().ln());
        assert!((policy.budget(t) - expected).abs() < 1e-12);
    }

    #[test]
    fn budget_never_negative() {
        assert_eq!(KlUcb::from(0.).budget(2), 0.);
    }

    #[test]
    fn undersampled_arm_gets_bonus() {
        let mut stats = ArmStatistics::new(2);
        for arm in [0, 1, 0, 0, 0, 0, 0] {
            stats.tick();
            stats.observe(arm, 0.5);
        }
        stats.tick();
        let choice = KlUcb::from(0.).choose(&stats, &mut Entropy::seeded(1));
        assert_eq!(choice.arm, 1);
    }
}
