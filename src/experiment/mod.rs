//! The resume/extend state machine over games × runs.
//!
//! - `Experiment`: bootstrap, crash recovery, per-run decisions
//! - `Prompt`: the one place a human is asked anything
//! - `Outcome`: what a pass did, run by run

mod outcome;
mod prompt;
mod runner;

pub use outcome::*;
pub use prompt::*;
pub use runner::*;
