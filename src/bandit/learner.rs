use super::*;
use crate::Reward;
use crate::random::Entropy;
use serde::Deserialize;
use serde::Serialize;

/// Persistent policy state of one agent.
///
/// warmup runs first for every algorithm; after the K forced
/// rounds the algorithm tag takes over. `constant` is not read
/// by any formula but is carried through checkpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Learner {
    algorithm: Algorithm,
    #[serde(default)]
    constant: Option<Reward>,
    noise_variance: Reward,
    #[serde(rename = "init_sequence")]
    warmup: Warmup,
}

impl Learner {
    pub fn new(
        algorithm: Algorithm,
        constant: Option<Reward>,
        noise_variance: Reward,
        arms: usize,
        rng: &mut Entropy,
    ) -> Self {
        Self {
            algorithm,
            constant,
            noise_variance,
            warmup: Warmup::random(arms, rng),
        }
    }
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
    pub fn constant(&self) -> Option<Reward> {
        self.constant
    }
    pub fn warmup(&self) -> &Warmup {
        &self.warmup
    }
}

impl Strategy for Learner {
    fn choose(&self, stats: &ArmStatistics, rng: &mut Entropy) -> Choice {
        self.warmup
            .force(stats.t())
            .unwrap_or_else(|| self.algorithm.choose(self.noise_variance, stats, rng))
    }
}
