use super::*;
use crate::Error;
use crate::Run;
use crate::config::ExperimentConfig;
use crate::config::GameConfig;
use crate::random::Entropy;
use crate::save::*;
use crate::sim::Simulation;

/// Executes every game × run of a configuration against its save folder.
///
/// each invocation walks the same state machine, so running it again
/// is always safe: completed runs are skipped, runs whose CSV went
/// missing are rebuilt from their checkpoint, shorter runs continue
/// from where their checkpoint stopped, and new runs start from their
/// deterministic seed. games absent from the folder's manifest are an
/// extension and go into files carrying `suffix`.
#[derive(Debug, Clone)]
pub struct Experiment {
    config: ExperimentConfig,
    suffix: String,
    sentinel: Sentinel,
}

impl Experiment {
    pub fn new(config: ExperimentConfig, suffix: impl Into<String>) -> Result<Self, Error> {
        let suffix = suffix.into();
        config.validate()?;
        Self::check(&suffix)?;
        Ok(Self {
            config,
            suffix,
            sentinel: Sentinel::default(),
        })
    }
    pub fn with_sentinel(self, sentinel: Sentinel) -> Self {
        Self { sentinel, ..self }
    }
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }
    pub fn store(&self) -> Store {
        Store::new(&self.config.defaults.save_folder, &self.suffix)
    }

    /// suffixes must keep `cp_run{r}{suffix}.json` unambiguous
    fn check(suffix: &str) -> Result<(), Error> {
        if suffix.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(Error::Config(format!("suffix {:?} starts with a digit", suffix)));
        }
        if suffix.contains(['/', '\\']) {
            return Err(Error::Config(format!("suffix {:?} contains a path separator", suffix)));
        }
        Ok(())
    }

    pub fn run(&self, prompt: &mut impl Prompt) -> Result<Outcome, Error> {
        if !self.bootstrap(prompt)? {
            return Ok(Outcome::Aborted);
        }
        let recovered = self.recover()?;
        let games = self.games()?;
        let mut summary = Summary {
            games: games.len(),
            recovered,
            ..Summary::default()
        };
        let store = self.store();
        for run in 0..self.config.defaults.runs {
            self.execute(&store, &games, run, &mut summary)?;
        }
        self.sentinel.clear()?;
        log::info!(
            "finished {} run(s): {} simulated, {} healed, {} skipped",
            self.config.defaults.runs,
            summary.simulated.len(),
            summary.healed.len(),
            summary.skipped.len()
        );
        Ok(Outcome::Finished(summary))
    }

    /// false when the user declines to continue in an existing folder
    fn bootstrap(&self, prompt: &mut impl Prompt) -> Result<bool, Error> {
        let folder = &self.config.defaults.save_folder;
        if folder.is_dir() {
            let question = format!(
                "folder {} already exists. Y continues an interrupted experiment, Q quits [Y/Q]",
                folder.display()
            );
            match prompt.confirm(&question, "Y", "Q")? {
                true => log::info!("continuing in {}", folder.display()),
                false => {
                    log::info!("quitting, {} left untouched", folder.display());
                    return Ok(false);
                }
            }
        } else {
            std::fs::create_dir_all(folder)?;
            log::info!("created {}", folder.display());
        }
        Ok(true)
    }

    /// games this pass covers, after reconciling with the manifest.
    /// nothing is written when the extension lacks a suffix or
    /// would put two games with one title under the same suffix.
    fn games(&self) -> Result<Vec<GameConfig>, Error> {
        let folder = &self.config.defaults.save_folder;
        let mut manifest = match Manifest::load(folder)? {
            Some(manifest) => manifest,
            None => {
                let manifest = Manifest::new(folder, self.config.clone());
                manifest.save()?;
                return Ok(manifest.games(&self.suffix));
            }
        };
        if manifest.config().defaults.player != self.config.defaults.player {
            return Err(Error::Config(format!(
                "folder was run with {} players, config asks for {}",
                manifest.config().defaults.player,
                self.config.defaults.player
            )));
        }
        let missing = manifest.missing(&self.config);
        if !missing.is_empty() {
            if self.suffix.is_empty() {
                return Err(Error::SuffixRequired);
            }
            log::info!("{} new game(s) extend the experiment", missing.len());
            manifest.extend(&self.suffix, missing)?;
        }
        manifest.adopt(self.config.defaults.clone());
        manifest.save()?;
        Ok(manifest.games(&self.suffix))
    }

    /// rebuild the CSV of the run a previous process died in
    fn recover(&self) -> Result<Option<Run>, Error> {
        let Some(marker) = self.sentinel.read()? else {
            return Ok(None);
        };
        log::warn!(
            "previous invocation stopped during run {}{} in {}",
            marker.run,
            marker.suffix,
            marker.folder.display()
        );
        match Store::new(&marker.folder, &marker.suffix).regenerate(marker.run) {
            Ok(_) => Ok(Some(marker.run)),
            Err(Error::MissingArtifact(path)) => {
                log::info!("no checkpoint at {}, nothing to recover", path.display());
                Ok(None)
            }
            Err(Error::Json(e)) => {
                log::warn!("checkpoint of run {} unreadable ({}), it will be re-simulated", marker.run, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// a corrupted checkpoint counts as absent
    fn restore(&self, store: &Store, run: Run) -> Result<Option<Checkpoint>, Error> {
        match store.load(run) {
            Err(Error::Json(e)) => {
                log::warn!("discarding unreadable checkpoint of run {}: {}", run, e);
                Ok(None)
            }
            other => other,
        }
    }

    fn execute(
        &self,
        store: &Store,
        games: &[GameConfig],
        run: Run,
        summary: &mut Summary,
    ) -> Result<(), Error> {
        let horizon = self.config.defaults.horizon;
        let players = self.config.defaults.player;
        let checkpoint = self.restore(store, run)?;
        let ref mut rng = match &checkpoint {
            Some(checkpoint) => Entropy::from(checkpoint.rng_state),
            None => Entropy::seeded(self.config.defaults.seed.wrapping_add(run as u64)),
        };
        self.sentinel.write(store.folder(), run, store.suffix())?;

        let recorded = (0..games.len())
            .map(|g| checkpoint.as_ref().map(|c| c.recorded(g)).unwrap_or_default())
            .collect::<Vec<_>>();
        let expected = recorded.iter().map(|n| (*n).max(horizon)).sum::<usize>();
        if checkpoint.is_some() && recorded.iter().all(|n| *n >= horizon) {
            if store.csv_complete(run, expected)? {
                log::info!("run {} complete, skipping", run);
                summary.skipped.push(run);
            } else {
                log::info!("run {} complete but its csv is not, regenerating", run);
                store.regenerate(run)?;
                summary.healed.push(run);
            }
            return Ok(());
        }

        let (mut ledger, mut envs) = checkpoint
            .map(|c| (c.metrics, c.env_state))
            .unwrap_or_default();
        if envs.len() > games.len() {
            return Err(Error::Config(format!(
                "checkpoint of run {} holds {} games, config has {}",
                run,
                envs.len(),
                games.len()
            )));
        }
        let simulation = Simulation::new(horizon);
        for (g, game) in games.iter().enumerate() {
            if g == envs.len() {
                envs.push(game.environment(players, rng)?);
            }
            let env = &mut envs[g];
            let trace = simulation.run(env, rng);
            if !trace.is_empty() {
                log::info!(
                    "run {} {}: rounds {}..{}",
                    run,
                    game.title(),
                    trace.start(),
                    trace.start() + trace.len()
                );
                ledger.record(&game.title(), run, env.model().arms(), &trace)?;
            }
        }
        let checkpoint = Checkpoint::new(run, rng.snapshot(), ledger, envs);
        store.save(run, &checkpoint)?;
        Store::aggregate(&checkpoint, &store.csv(run))?;
        summary.simulated.push(run);
        Ok(())
    }
}
