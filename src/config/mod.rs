//! Experiment configuration.

mod defaults;
mod experiment;
mod game;

pub use defaults::*;
pub use experiment::*;
pub use game::*;
