use crate::Error;
use crate::Run;
use crate::metrics::Ledger;
use crate::random::RngState;
use crate::sim::Environment;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// End-of-run snapshot: the source of truth for a run.
///
/// written once a run (or a horizon extension of it) completes;
/// the CSV of the run is always re-derivable from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub version: u32,
    pub next_run: Run,
    pub rng_state: RngState,
    pub metrics: Ledger,
    pub env_state: Vec<Environment>,
}

impl Checkpoint {
    pub fn new(run: Run, rng_state: RngState, metrics: Ledger, env_state: Vec<Environment>) -> Self {
        Self {
            version: crate::CHECKPOINT_VERSION,
            next_run: run + 1,
            rng_state,
            metrics,
            env_state,
        }
    }
    /// rounds recorded for game `g`, 0 when the game is absent
    pub fn recorded(&self, g: usize) -> usize {
        self.env_state.get(g).map(Environment::rounds).unwrap_or_default()
    }
    pub fn read(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        let version = serde_json::from_str::<Version>(&text)?.version;
        match version {
            crate::CHECKPOINT_VERSION => Ok(serde_json::from_str(&text)?),
            other => Err(Error::UnsupportedVersion(other)),
        }
    }
    pub fn write(&self, path: &Path) -> Result<(), Error> {
        super::write_atomic(path, serde_json::to_string(self)?.as_bytes())
    }
}

/// peeked before the full payload is trusted
#[derive(Deserialize)]
struct Version {
    version: u32,
}
