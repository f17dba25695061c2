use super::*;
use crate::Reward;
use crate::random::Entropy;
use rand::Rng;
use rand_distr::StandardNormal;

/// Gaussian Thompson sampling with a conjugate normal prior.
///
/// posterior over each arm's mean given prior N(1, 1)
/// and observation variance `var`:
///
/// mean = (1 + sums/var) / (1 + plays/var)
/// var  = 1 / (1 + plays/var)
#[derive(Debug, Clone, Copy)]
pub struct Thompson {
    variance: Reward,
}

impl From<Reward> for Thompson {
    fn from(noise: Reward) -> Self {
        Self {
            variance: variance(noise),
        }
    }
}

impl Thompson {
    /// posterior (mean, variance) per arm
    pub fn posterior(&self, stats: &ArmStatistics) -> Vec<(Reward, Reward)> {
        let m0 = crate::THOMPSON_PRIOR_MEAN;
        let v0 = crate::THOMPSON_PRIOR_VARIANCE;
        stats
            .sums()
            .iter()
            .zip(stats.plays())
            .map(|(&s, &n)| {
                let precision = 1. / v0 + n as Reward / self.variance;
                ((m0 / v0 + s / self.variance) / precision, 1. / precision)
            })
            .collect()
    }
}

impl Strategy for Thompson {
    fn choose(&self, stats: &ArmStatistics, rng: &mut Entropy) -> Choice {
        let posterior = self.posterior(stats);
        let samples = posterior
            .iter()
            .map(|(mean, var)| mean + var.sqrt() * rng.sample::<Reward, _>(StandardNormal))
            .collect::<Vec<_>>();
        let means = posterior.iter().map(|(mean, _)| *mean).collect::<Vec<_>>();
        let arm = argmax(&samples, rng);
        Choice::against(arm, &maximizers(&means))
    }
}
