//! Experiment Binary
//!
//! Runs, prunes and inspects resumable bandit experiments.
//!
//! Subcommands: run, prune, aggregate, inspect

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use robobandit::config::ExperimentConfig;
use robobandit::experiment::*;
use robobandit::save::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Run or resume every game and run of a configuration")]
    Run {
        #[arg(long)]
        config: PathBuf,
        #[arg(long, default_value = "")]
        suffix: String,
    },
    #[command(about = "Delete every checkpoint but the latest")]
    Prune {
        #[arg(long)]
        folder: PathBuf,
        #[arg(long, default_value = "")]
        suffix: String,
    },
    #[command(about = "Regenerate the CSV of one checkpoint")]
    Aggregate {
        #[arg(long)]
        checkpoint: PathBuf,
    },
    #[command(about = "Report recorded timesteps per metric of one checkpoint")]
    Inspect {
        #[arg(long)]
        checkpoint: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    robobandit::log();
    match Cli::parse().command {
        Command::Run { config, suffix } => {
            let config = ExperimentConfig::load(&config)
                .with_context(|| format!("loading {}", config.display()))?;
            match Experiment::new(config, suffix)?.run(&mut Terminal)? {
                Outcome::Aborted => log::info!("aborted"),
                Outcome::Finished(summary) => log::info!("{:?}", summary),
            }
        }
        Command::Prune { folder, suffix } => {
            let store = Store::new(folder, suffix);
            match store.latest()? {
                None => log::info!("no checkpoints in {}", store.folder().display()),
                Some((run, path)) => {
                    let question = format!("keep only run {} ({}) [Y/N]", run, path.display());
                    if Terminal.confirm(&question, "Y", "N")? {
                        store.prune()?;
                    }
                }
            }
        }
        Command::Aggregate { checkpoint } => {
            let csv = Store::paired(&checkpoint)
                .with_context(|| format!("{} is not a checkpoint path", checkpoint.display()))?;
            let rows = Store::aggregate(&Checkpoint::read(&checkpoint)?, &csv)?;
            log::info!("{} rows in {}", rows, csv.display());
        }
        Command::Inspect { checkpoint } => {
            let checkpoint = Checkpoint::read(&checkpoint)
                .with_context(|| format!("reading {}", checkpoint.display()))?;
            log::info!("next run {}", checkpoint.next_run);
            for (metric, len) in checkpoint.metrics.lengths() {
                log::info!("{:<12} {}", metric.name(), len);
            }
        }
    }
    Ok(())
}
