use super::*;
use crate::random::Entropy;

/// Drives an environment up to a fixed horizon.
///
/// the starting round is whatever the environment has already
/// played, so a fresh environment runs the full horizon and a
/// restored one only the remainder.
#[derive(Debug, Clone, Copy)]
pub struct Simulation {
    horizon: usize,
}

impl Simulation {
    pub fn new(horizon: usize) -> Self {
        Self { horizon }
    }
    pub fn horizon(&self) -> usize {
        self.horizon
    }
    pub fn run(&self, env: &mut Environment, rng: &mut Entropy) -> Trace {
        let start = env.rounds();
        let mut trace = Trace::new(start, env.agents().len());
        for _ in start..self.horizon {
            trace.record(&env.step(rng));
        }
        log::debug!("simulated rounds {}..{}", start, self.horizon.max(start));
        trace
    }
}
