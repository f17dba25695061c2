use crate::Arm;
use crate::Reward;
use crate::bandit::*;
use crate::random::Entropy;
use serde::Deserialize;
use serde::Serialize;

/// One learner with its statistics and append-only histories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    stats: ArmStatistics,
    learner: Learner,
    reward: Vec<Reward>,
    regret: Vec<Reward>,
}

impl Agent {
    pub fn new(learner: Learner, arms: usize) -> Self {
        Self {
            stats: ArmStatistics::new(arms),
            learner,
            reward: Vec::new(),
            regret: Vec::new(),
        }
    }
    pub fn stats(&self) -> &ArmStatistics {
        &self.stats
    }
    pub fn learner(&self) -> &Learner {
        &self.learner
    }
    pub fn rewards(&self) -> &[Reward] {
        &self.reward
    }
    pub fn regrets(&self) -> &[Reward] {
        &self.regret
    }
    /// rounds fully played by this agent
    pub fn rounds(&self) -> usize {
        self.reward.len()
    }
    /// ticks the round counter before the policy looks at it
    pub fn decide(&mut self, rng: &mut Entropy) -> Choice {
        self.stats.tick();
        self.learner.choose(&self.stats, rng)
    }
    pub fn update(&mut self, arm: Arm, reward: Reward, regret: Reward) {
        self.stats.observe(arm, reward);
        self.reward.push(reward);
        self.regret.push(regret);
    }
}
