//! Per-arm statistics and bandit decision policies.
//!
//! - `ArmStatistics`: sufficient statistics over one agent's arms
//! - `Strategy`: maps statistics to a `Choice` of arm
//! - `Ucb`, `Thompson`, `KlUcb`, `SoftMax`: the four strategies
//! - `Warmup`: forced round-robin over a fixed arm permutation
//! - `Learner`: warmup composed with one `Algorithm`

mod algorithm;
mod choice;
mod klucb;
mod learner;
mod softmax;
mod stats;
mod strategy;
mod thompson;
mod ucb;
mod warmup;

pub use algorithm::*;
pub use choice::*;
pub use klucb::*;
pub use learner::*;
pub use softmax::*;
pub use stats::*;
pub use strategy::*;
pub use thompson::*;
pub use ucb::*;
pub use warmup::*;
