use serde::Deserialize;
use serde::Serialize;

/// Exact position of an `Entropy` stream.
///
/// restoring from this snapshot replays the same
/// sequence of draws the original source would have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: [u8; 32],
    pub stream: u64,
    pub word: u128,
}
