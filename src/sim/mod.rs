//! Agents, environments and the round loop.

mod agent;
mod environment;
mod simulation;
mod step;
mod trace;

pub use agent::*;
pub use environment::*;
pub use simulation::*;
pub use step::*;
pub use trace::*;
