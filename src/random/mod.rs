//! Explicitly owned, snapshot-able random source.

mod entropy;
mod state;

pub use entropy::*;
pub use state::*;
