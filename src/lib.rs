//! Resumable multi-agent bandit experiments.
//!
//! Agents running UCB, Thompson Sampling, KL-UCB or SoftMax play repeated
//! coordination games against each other. Experiments span many games and
//! many runs, checkpoint after every run, and can be extended in horizon,
//! run count or game set without touching what was already recorded.
//!
//! # Module Structure
//!
//! - `bandit`: arm statistics and the four decision policies
//! - `payoff`: payoff tensors, generators, noise, regret baseline
//! - `sim`: agents, environments, the simulation loop
//! - `metrics`: flattened metric rows and per-run CSV tables
//! - `save`: checkpoints, manifests, sentinel, atomic file writes
//! - `experiment`: the resume/extend state machine
//! - `config`: experiment configuration
//! - `random`: the explicitly owned random source
pub mod bandit;
pub mod config;
pub mod experiment;
pub mod metrics;
pub mod payoff;
pub mod random;
pub mod save;
pub mod sim;

mod error;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Index of a discrete action available to an agent.
pub type Arm = usize;
/// Rewards, payoffs, regrets and running means.
pub type Reward = f64;
/// Round counter within one horizon (1-based once a round has started).
pub type Round = usize;
/// Repetition index of one full-horizon simulation.
pub type Run = usize;

// ============================================================================
// POLICY PARAMETERS
// ============================================================================
/// Variance added to the configured noise variance before it enters any
/// confidence bound (variance of a reward bounded in [0, 1]).
pub const VARIANCE_OFFSET: Reward = 0.25;
/// Floor applied to the effective observation variance.
pub const VARIANCE_FLOOR: Reward = 1e-2;
/// Scale of the UCB exploration bonus: sqrt(UCB_SCALE · var · ln t / n).
pub const UCB_SCALE: Reward = 8.0;
/// Prior mean of the Gaussian Thompson posterior.
pub const THOMPSON_PRIOR_MEAN: Reward = 1.0;
/// Prior variance of the Gaussian Thompson posterior.
pub const THOMPSON_PRIOR_VARIANCE: Reward = 1.0;
/// Weight of the ln ln t term in the KL-UCB exploration budget.
pub const KLUCB_C: Reward = 3.0;

// ============================================================================
// PAYOFF PARAMETERS
// ============================================================================
/// Payoff of a miscoordinated joint action that avoids both extreme arms.
pub const PARTIAL_PAYOFF: Reward = 0.2;
/// Slack used when normalizing payoff tensors into [slack/2, 1 - slack/2].
pub const NORMALIZE_SLACK: Reward = 0.0;

// ============================================================================
// PERSISTENCE
// ============================================================================
/// Schema version written into every checkpoint.
pub const CHECKPOINT_VERSION: u32 = 1;
/// Name of the sentinel file marking a run in progress.
pub const SENTINEL_FILE: &str = ".robobandit.inprogress";
/// Manifest snapshot of the experiment configuration.
pub const MANIFEST_FILE: &str = "config.yaml";
/// Checkpoint subdirectory of an experiment folder.
pub const CHECKPOINT_DIR: &str = "pkl";
/// CSV subdirectory of an experiment folder.
pub const OUTPUT_DIR: &str = "output";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
