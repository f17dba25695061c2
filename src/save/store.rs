use super::*;
use crate::Error;
use crate::Run;
use crate::metrics::Table;
use std::path::Path;
use std::path::PathBuf;

/// Result of a prune request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pruned {
    /// fewer than two checkpoints, nothing touched
    Refused(usize),
    /// checkpoints deleted, the latest kept
    Removed { kept: PathBuf, removed: Vec<PathBuf> },
}

/// Checkpoint and CSV layout of one experiment folder.
///
/// every file name carries `suffix`, so an extension pass
/// never collides with the files of the original games.
///
/// <folder>/pkl/cp_run{r}{suffix}.json
/// <folder>/output/run{r}{suffix}.csv
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    folder: PathBuf,
    suffix: String,
}

impl Store {
    pub fn new(folder: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            suffix: suffix.into(),
        }
    }
    pub fn folder(&self) -> &Path {
        &self.folder
    }
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
    pub fn checkpoint(&self, run: Run) -> PathBuf {
        self.folder
            .join(crate::CHECKPOINT_DIR)
            .join(format!("cp_run{}{}.json", run, self.suffix))
    }
    pub fn csv(&self, run: Run) -> PathBuf {
        self.folder
            .join(crate::OUTPUT_DIR)
            .join(format!("run{}{}.csv", run, self.suffix))
    }

    /// Ok(None) when no checkpoint was ever written for `run`
    pub fn load(&self, run: Run) -> Result<Option<Checkpoint>, Error> {
        let path = self.checkpoint(run);
        match path.exists() {
            false => Ok(None),
            true => Checkpoint::read(&path).map(Some),
        }
    }
    pub fn save(&self, run: Run, checkpoint: &Checkpoint) -> Result<(), Error> {
        checkpoint.write(&self.checkpoint(run))?;
        log::info!("saved checkpoint run {}{}", run, self.suffix);
        Ok(())
    }

    /// rebuild the CSV of `run` from its checkpoint alone
    pub fn regenerate(&self, run: Run) -> Result<usize, Error> {
        let path = self.checkpoint(run);
        match path.exists() {
            false => Err(Error::MissingArtifact(path)),
            true => Self::aggregate(&Checkpoint::read(&path)?, &self.csv(run)),
        }
    }
    /// write the long table of a checkpoint to `csv`, returning its line count
    pub fn aggregate(checkpoint: &Checkpoint, csv: &Path) -> Result<usize, Error> {
        let table = Table::from(&checkpoint.metrics);
        write_atomic(csv, table.render().as_bytes())?;
        log::info!("saved csv {} ({} rows)", csv.display(), table.len());
        Ok(table.len())
    }
    /// CSV paired with a checkpoint path: `pkl/cp_run{x}.json` -> `output/run{x}.csv`
    pub fn paired(checkpoint: &Path) -> Option<PathBuf> {
        let name = checkpoint.file_name()?.to_str()?;
        let stem = name.strip_prefix("cp_")?.strip_suffix(".json")?;
        let folder = checkpoint.parent()?.parent()?;
        Some(folder.join(crate::OUTPUT_DIR).join(format!("{}.csv", stem)))
    }
    /// data lines (header excluded) of the CSV of `run`, if present
    pub fn csv_rows(&self, run: Run) -> Result<Option<usize>, Error> {
        let path = self.csv(run);
        match path.exists() {
            false => Ok(None),
            true => Ok(Some(std::fs::read_to_string(&path)?.lines().count().saturating_sub(1))),
        }
    }
    pub fn csv_complete(&self, run: Run, expected: usize) -> Result<bool, Error> {
        Ok(self.csv_rows(run)? == Some(expected))
    }

    /// run index encoded in a checkpoint file name of this suffix
    fn parse(&self, name: &str) -> Option<Run> {
        let rest = name.strip_prefix("cp_run")?.strip_suffix(".json")?;
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        match &rest[digits..] == self.suffix {
            true => rest[..digits].parse().ok(),
            false => None,
        }
    }
    /// checkpoints of this suffix sorted by run index
    pub fn checkpoints(&self) -> Result<Vec<(Run, PathBuf)>, Error> {
        let dir = self.folder.join(crate::CHECKPOINT_DIR);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut found = std::fs::read_dir(&dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter_map(|entry| {
                let name = entry.file_name();
                self.parse(&name.to_string_lossy()).map(|run| (run, entry.path()))
            })
            .collect::<Vec<_>>();
        found.sort();
        Ok(found)
    }
    pub fn latest(&self) -> Result<Option<(Run, PathBuf)>, Error> {
        Ok(self.checkpoints()?.pop())
    }
    /// delete every checkpoint but the one with the highest run index.
    /// the last remaining checkpoint is never removed.
    pub fn prune(&self) -> Result<Pruned, Error> {
        let mut found = self.checkpoints()?;
        let count = found.len();
        let kept = match found.pop() {
            Some((_, kept)) if count >= 2 => kept,
            _ => {
                log::info!("{} checkpoint(s) in {}, nothing to prune", count, self.folder.display());
                return Ok(Pruned::Refused(count));
            }
        };
        let removed = found.into_iter().map(|(_, path)| path).collect::<Vec<_>>();
        for path in &removed {
            std::fs::remove_file(path)?;
            log::info!("removed {}", path.display());
        }
        log::info!("kept {}", kept.display());
        Ok(Pruned::Removed { kept, removed })
    }
}
