use crate::Arm;
use crate::Reward;
use crate::Round;
use serde::Deserialize;
use serde::Serialize;

/// Elementwise mean that defines 0/0 := 0.
pub fn safe_divide(sums: &[Reward], plays: &[u64]) -> Vec<Reward> {
    sums.iter()
        .zip(plays)
        .map(|(&s, &n)| match n {
            0 => 0.,
            n => s / n as Reward,
        })
        .collect()
}

/// Sufficient statistics over one agent's arms.
///
/// `t` counts rounds started. it is ticked before the policy
/// decides and the arm is observed after the payoff is drawn,
/// so between rounds `plays` always sums to `t`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmStatistics {
    plays: Vec<u64>,
    sums: Vec<Reward>,
    means: Vec<Reward>,
    t: Round,
}

impl ArmStatistics {
    pub fn new(arms: usize) -> Self {
        Self {
            plays: vec![0; arms],
            sums: vec![0.; arms],
            means: vec![0.; arms],
            t: 0,
        }
    }
    pub fn arms(&self) -> usize {
        self.plays.len()
    }
    pub fn plays(&self) -> &[u64] {
        &self.plays
    }
    pub fn sums(&self) -> &[Reward] {
        &self.sums
    }
    pub fn means(&self) -> &[Reward] {
        &self.means
    }
    pub fn t(&self) -> Round {
        self.t
    }
    /// start a new round and return its 1-based index
    pub fn tick(&mut self) -> Round {
        self.t += 1;
        self.t
    }
    pub fn observe(&mut self, arm: Arm, reward: Reward) {
        self.plays[arm] += 1;
        self.sums[arm] += reward;
        self.means = safe_divide(&self.sums, &self.plays);
    }
}
