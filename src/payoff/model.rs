use super::*;
use crate::Arm;
use crate::Error;
use crate::Reward;
use serde::Deserialize;
use serde::Serialize;

/// Normalized payoff tensors of every agent plus the regret baseline.
///
/// regret is measured against a two-party coordination baseline
/// built from agents 0 and 1 only, whatever the player count:
///
/// low    = min(payoff₀, payoff₁)
/// regret = max(low) - low
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffModel {
    tensors: Vec<Tensor>,
    baseline: Tensor,
}

impl PayoffModel {
    pub fn build(
        matrix: &Matrix,
        generator: Option<Generator>,
        players: usize,
    ) -> Result<Self, Error> {
        if players < 2 {
            return Err(Error::Config(format!("need at least 2 players, got {}", players)));
        }
        let tensors = match matrix {
            Matrix::Base(rows) => generator
                .unwrap_or_else(|| Generator::detect(rows))
                .expand(rows, players)?,
            Matrix::Expanded(values) => values
                .iter()
                .map(Tensor::from_nested)
                .collect::<Result<Vec<_>, _>>()?,
        };
        if tensors.len() != players {
            return Err(Error::Config(format!(
                "{} payoff tensors for {} players",
                tensors.len(),
                players
            )));
        }
        Self::try_from(tensors)
    }
    pub fn players(&self) -> usize {
        self.tensors.len()
    }
    pub fn arms(&self) -> usize {
        self.baseline.arms()
    }
    pub fn tensors(&self) -> &[Tensor] {
        &self.tensors
    }
    pub fn baseline(&self) -> &Tensor {
        &self.baseline
    }
    pub fn payoff(&self, agent: usize, joint: &[Arm]) -> Reward {
        self.tensors[agent].get(joint)
    }
    pub fn regret(&self, joint: &[Arm]) -> Reward {
        self.baseline.get(joint)
    }
}

/// normalizes raw tensors and derives the baseline
impl TryFrom<Vec<Tensor>> for PayoffModel {
    type Error = Error;
    fn try_from(raw: Vec<Tensor>) -> Result<Self, Self::Error> {
        let n = raw.len();
        if n < 2 {
            return Err(Error::Config("need one payoff tensor per agent, at least 2".into()));
        }
        if raw.iter().any(|t| t.players() != n || t.arms() != raw[0].arms()) {
            return Err(Error::Config(format!(
                "expected {} tensors of shape {}^{}",
                n,
                raw[0].arms(),
                n
            )));
        }
        let tensors = raw
            .iter()
            .map(|t| t.normalize(crate::NORMALIZE_SLACK))
            .collect::<Result<Vec<_>, _>>()?;
        let baseline = tensors[0].minimum(&tensors[1]).shortfall();
        Ok(Self { tensors, baseline })
    }
}
