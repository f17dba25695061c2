use super::*;
use crate::Reward;
use crate::random::Entropy;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

/// Tag naming one of the four bandit strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "UCB")]
    Ucb,
    #[serde(rename = "TS")]
    Thompson,
    #[serde(rename = "KLUCB")]
    KlUcb,
    #[serde(rename = "SoftMax")]
    SoftMax,
}

impl Algorithm {
    /// dispatch to the strategy this tag names
    pub fn choose(self, noise: Reward, stats: &ArmStatistics, rng: &mut Entropy) -> Choice {
        match self {
            Self::Ucb => Ucb::from(noise).choose(stats, rng),
            Self::Thompson => Thompson::from(noise).choose(stats, rng),
            Self::KlUcb => KlUcb::from(noise).choose(stats, rng),
            Self::SoftMax => SoftMax.choose(stats, rng),
        }
    }
}

impl FromStr for Algorithm {
    type Err = crate::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UCB" => Ok(Self::Ucb),
            "TS" => Ok(Self::Thompson),
            "KLUCB" => Ok(Self::KlUcb),
            "SoftMax" => Ok(Self::SoftMax),
            _ => Err(crate::Error::Config(format!("unknown algorithm {:?}", s))),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ucb => write!(f, "UCB"),
            Self::Thompson => write!(f, "TS"),
            Self::KlUcb => write!(f, "KLUCB"),
            Self::SoftMax => write!(f, "SoftMax"),
        }
    }
}
