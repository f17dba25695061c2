use super::Choice;
use crate::Arm;
use crate::Round;
use crate::random::Entropy;
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde::Serialize;

/// Forced round-robin over a permutation of the arms.
///
/// the permutation is drawn once when the policy is built and
/// is persisted with it, so a resumed agent keeps its order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Warmup(Vec<Arm>);

impl Warmup {
    pub fn random(arms: usize, rng: &mut Entropy) -> Self {
        let mut sequence = (0..arms).collect::<Vec<_>>();
        sequence.shuffle(rng);
        Self(sequence)
    }
    pub fn sequence(&self) -> &[Arm] {
        &self.0
    }
    /// rounds 1..=K play the permutation in order
    pub fn force(&self, t: Round) -> Option<Choice> {
        debug_assert!(t > 0, "round counter ticks before choosing");
        match t {
            t if t <= self.0.len() => Some(Choice::forced(self.0[t - 1])),
            _ => None,
        }
    }
}

impl From<Vec<Arm>> for Warmup {
    fn from(sequence: Vec<Arm>) -> Self {
        Self(sequence)
    }
}
