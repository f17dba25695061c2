//! Error types for experiment operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring, simulating or persisting an experiment.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem failure while reading or writing an artifact.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed checkpoint, manifest or configuration document.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Noise distribution other than the Gaussian one.
    #[error("unsupported noise distribution: {0}")]
    UnsupportedDistribution(String),

    /// Inconsistent or incomplete configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// New games were added to an existing experiment without a file suffix.
    #[error("game set extension detected, a non-empty suffix is required")]
    SuffixRequired,

    /// Answer to a prompt that is neither of the two accepted choices.
    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),

    /// Payoff tensor whose entries are all equal cannot be normalized.
    #[error("payoff tensor has zero range and cannot be normalized")]
    DegeneratePayoff,

    /// An artifact that should exist at this point does not.
    #[error("missing artifact: {}", .0.display())]
    MissingArtifact(PathBuf),

    /// Checkpoint written by an incompatible schema.
    #[error("unsupported checkpoint version {0}")]
    UnsupportedVersion(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
