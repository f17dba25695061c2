use serde::Deserialize;
use serde::Serialize;
use std::path::PathBuf;

/// Settings shared by every game of an experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub runs: usize,
    pub horizon: usize,
    pub player: usize,
    pub seed: u64,
    pub save_folder: PathBuf,
}
