use super::ArmStatistics;
use super::Choice;
use crate::Arm;
use crate::Reward;
use crate::random::Entropy;
use rand::Rng;

/// A bandit decision rule.
///
/// implementations only ever see statistics in which every arm
/// has been played at least once; warmup is handled by `Learner`.
pub trait Strategy {
    fn choose(&self, stats: &ArmStatistics, rng: &mut Entropy) -> Choice;
}

/// Effective observation variance used by every confidence bound.
pub fn variance(noise: Reward) -> Reward {
    (noise + crate::VARIANCE_OFFSET).max(crate::VARIANCE_FLOOR)
}

/// All arms whose value equals the maximum.
pub fn maximizers(values: &[Reward]) -> Vec<Arm> {
    let best = values.iter().copied().fold(Reward::NEG_INFINITY, Reward::max);
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v == best)
        .map(|(a, _)| a)
        .collect()
}

/// Arg-max with uniform tie-breaking drawn from the run's random source.
/// a unique maximizer consumes no randomness.
pub fn argmax(values: &[Reward], rng: &mut Entropy) -> Arm {
    let best = maximizers(values);
    match best.len() {
        0 => 0,
        1 => best[0],
        n => best[rng.random_range(0..n)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximizers_keep_ties() {
        assert_eq!(maximizers(&[0.1, 0.9, 0.9, 0.3]), vec![1, 2]);
        assert_eq!(maximizers(&[2.0]), vec![0]);
    }

    #[test]
    fn ties_are_broken_among_maximizers() {
        let ref mut rng = Entropy::seeded(0);
        let values = [0.5, 0.7, 0.2, 0.7];
        let picks = (0..256).map(|_| argmax(&values, rng)).collect::<Vec<_>>();
        assert!(picks.iter().all(|a| *a == 1 || *a == 3));
        assert!(picks.contains(&1));
        assert!(picks.contains(&3));
    }

    #[test]
    fn variance_is_floored() {
        assert!((variance(0.1) - 0.35).abs() < 1e-12);
        assert_eq!(variance(-1.0), crate::VARIANCE_FLOOR);
    }
}
