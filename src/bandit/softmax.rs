use super::*;
use crate::Reward;
use crate::random::Entropy;
use rand::Rng;

/// Boltzmann exploration with a logarithmic cooling schedule.
///
/// tau = 1 / ln(t + 1), p(a) ∝ exp(mean(a) / tau),
/// sampled by inverse CDF on a single uniform draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftMax;

impl SoftMax {
    pub fn temperature(t: usize) -> Reward {
        1. / ((t + 1) as Reward).ln()
    }
    pub fn distribution(stats: &ArmStatistics) -> Vec<Reward> {
        let tau = Self::temperature(stats.t());
        let peak = stats.means().iter().copied().fold(Reward::NEG_INFINITY, Reward::max);
        let weights = stats
            .means()
            .iter()
            .map(|m| ((m - peak) / tau).exp())
            .collect::<Vec<_>>();
        let total = weights.iter().sum::<Reward>();
        weights.into_iter().map(|w| w / total).collect()
    }
}

impl Strategy for SoftMax {
    fn choose(&self, stats: &ArmStatistics, rng: &mut Entropy) -> Choice {
        let draw = rng.random::<Reward>();
        let arm = Self::distribution(stats)
            .into_iter()
            .scan(0., |cdf, p| {
                *cdf += p;
                Some(*cdf)
            })
            .position(|cdf| cdf >= draw)
            .unwrap_or(stats.arms() - 1);
        Choice::against(arm, &maximizers(stats.means()))
    }
}
