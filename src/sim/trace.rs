use super::Step;
use crate::Reward;

/// Time series of one agent over the rounds of one simulation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub play: Vec<Reward>,
    pub reward: Vec<Reward>,
    pub regret: Vec<Reward>,
    pub exploration: Vec<Reward>,
}

/// Per-agent series collected from round `start` onward.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    start: usize,
    agents: Vec<Series>,
}

impl Trace {
    pub fn new(start: usize, agents: usize) -> Self {
        Self {
            start,
            agents: vec![Series::default(); agents],
        }
    }
    /// absolute index of the first recorded round
    pub fn start(&self) -> usize {
        self.start
    }
    pub fn len(&self) -> usize {
        self.agents.first().map(|s| s.play.len()).unwrap_or_default()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn agents(&self) -> &[Series] {
        &self.agents
    }
    pub fn record(&mut self, step: &Step) {
        for (i, series) in self.agents.iter_mut().enumerate() {
            series.play.push(step.actions[i] as Reward);
            series.reward.push(step.rewards[i]);
            series.regret.push(step.regret);
            series.exploration.push(step.exploring[i] as u8 as Reward);
        }
    }
}
