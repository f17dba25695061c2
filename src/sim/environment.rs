use super::*;
use crate::Reward;
use crate::bandit::*;
use crate::payoff::*;
use crate::random::Entropy;
use serde::Deserialize;
use serde::Serialize;

/// One game instance for one run: its agents, payoffs and noise.
///
/// serialized whole into checkpoints so a later invocation can
/// continue the horizon exactly where this one stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    model: PayoffModel,
    noise: Noise,
    agents: Vec<Agent>,
}

impl Environment {
    /// builds agents in order; each one draws its warmup permutation from `rng`
    pub fn new(
        model: PayoffModel,
        noise: Noise,
        algorithms: &[Algorithm],
        constants: &[Option<Reward>],
        rng: &mut Entropy,
    ) -> Self {
        assert_eq!(algorithms.len(), model.players(), "one algorithm per player");
        let arms = model.arms();
        let agents = algorithms
            .iter()
            .enumerate()
            .map(|(i, algorithm)| {
                let constant = constants.get(i).copied().flatten();
                Learner::new(*algorithm, constant, noise.variance(), arms, rng)
            })
            .map(|learner| Agent::new(learner, arms))
            .collect();
        Self {
            model,
            noise,
            agents,
        }
    }
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }
    pub fn model(&self) -> &PayoffModel {
        &self.model
    }
    pub fn noise(&self) -> &Noise {
        &self.noise
    }
    /// rounds already played
    pub fn rounds(&self) -> usize {
        self.agents.first().map(Agent::rounds).unwrap_or_default()
    }
    /// every agent decides, then every agent is paid.
    /// noise is drawn per agent; regret is shared by all agents.
    pub fn step(&mut self, rng: &mut Entropy) -> Step {
        let choices = self
            .agents
            .iter_mut()
            .map(|agent| agent.decide(rng))
            .collect::<Vec<Choice>>();
        let actions = choices.iter().map(|c| c.arm).collect::<Vec<_>>();
        let rewards = (0..self.agents.len())
            .map(|i| self.model.payoff(i, &actions) + self.noise.sample(rng))
            .collect::<Vec<_>>();
        let regret = self.model.regret(&actions);
        for (agent, (arm, reward)) in self.agents.iter_mut().zip(actions.iter().zip(&rewards)) {
            agent.update(*arm, *reward, regret);
        }
        log::trace!("joint {:?} rewards {:?} regret {:.4}", actions, rewards, regret);
        Step {
            exploring: choices.iter().map(|c| c.exploring).collect(),
            actions,
            rewards,
            regret,
        }
    }
}
