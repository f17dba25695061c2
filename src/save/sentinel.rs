use crate::Error;
use crate::Run;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// What the sentinel records about the run in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub folder: PathBuf,
    pub run: Run,
    pub suffix: String,
}

/// Marker file naming the run that is currently being executed.
///
/// written before a run starts and removed once the whole
/// pass finishes. finding it at startup means the previous
/// process died, and the run it names may have a checkpoint
/// whose CSV was never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentinel {
    path: PathBuf,
}

impl Default for Sentinel {
    /// `.robobandit.inprogress` in the working directory
    fn default() -> Self {
        Self::at(crate::SENTINEL_FILE)
    }
}

impl Sentinel {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn write(&self, folder: &Path, run: Run, suffix: &str) -> Result<(), Error> {
        let marker = Marker {
            folder: folder.to_path_buf(),
            run,
            suffix: suffix.to_string(),
        };
        super::write_atomic(&self.path, serde_json::to_string(&marker)?.as_bytes())
    }
    /// an unreadable marker is reported and ignored
    pub fn read(&self) -> Result<Option<Marker>, Error> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&text) {
            Ok(marker) => Ok(Some(marker)),
            Err(e) => {
                log::warn!("ignoring unreadable sentinel {}: {}", self.path.display(), e);
                Ok(None)
            }
        }
    }
    pub fn clear(&self) -> Result<(), Error> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => Ok(other?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_clear() {
        let dir = tempfile::tempdir().unwrap();
        let sentinel = Sentinel::at(dir.path().join("marker"));
        assert_eq!(sentinel.read().unwrap(), None);
        sentinel.write(Path::new("exp"), 3, "_b").unwrap();
        let marker = sentinel.read().unwrap().unwrap();
        assert_eq!(marker.run, 3);
        assert_eq!(marker.suffix, "_b");
        assert_eq!(marker.folder, PathBuf::from("exp"));
        sentinel.clear().unwrap();
        sentinel.clear().unwrap();
        assert!(!sentinel.path().exists());
    }

    #[test]
    fn garbage_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let sentinel = Sentinel::at(dir.path().join("marker"));
        std::fs::write(sentinel.path(), "not json").unwrap();
        assert_eq!(sentinel.read().unwrap(), None);
    }
}
