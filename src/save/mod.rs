//! Durable experiment artifacts.
//!
//! - `write_atomic`: temp file + rename, the only durability primitive
//! - `Checkpoint`: versioned end-of-run snapshot
//! - `Store`: checkpoint and CSV paths of one experiment folder
//! - `Manifest`: configuration snapshot, game-set extension
//! - `Sentinel`: marker of the run in progress

mod atomic;
mod checkpoint;
mod manifest;
mod sentinel;
mod store;

pub use atomic::*;
pub use checkpoint::*;
pub use manifest::*;
pub use sentinel::*;
pub use store::*;
