use crate::Error;
use crate::config::ExperimentConfig;
use crate::config::GameConfig;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

/// on-disk form: the configuration plus which suffix added which keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Snapshot {
    #[serde(flatten)]
    config: ExperimentConfig,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    extensions: BTreeMap<String, Vec<String>>,
}

/// Snapshot of the configuration an experiment folder was built with.
///
/// stored as JSON inside `config.yaml`, which any YAML reader
/// accepts as well. games only ever get appended under fresh
/// keys, and each extension remembers the suffix its files
/// were written under.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    path: PathBuf,
    snapshot: Snapshot,
}

impl Manifest {
    pub fn path(folder: &Path) -> PathBuf {
        folder.join(crate::MANIFEST_FILE)
    }
    pub fn new(folder: &Path, config: ExperimentConfig) -> Self {
        Self {
            path: Self::path(folder),
            snapshot: Snapshot {
                config,
                extensions: BTreeMap::new(),
            },
        }
    }
    /// Ok(None) for a folder that has never been run
    pub fn load(folder: &Path) -> Result<Option<Self>, Error> {
        let path = Self::path(folder);
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&path)?;
        Ok(Some(Self {
            snapshot: serde_json::from_str(&text)?,
            path,
        }))
    }
    pub fn save(&self) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&self.snapshot)?;
        super::write_atomic(&self.path, json.as_bytes())?;
        log::info!("saved manifest {}", self.path.display());
        Ok(())
    }
    pub fn config(&self) -> &ExperimentConfig {
        &self.snapshot.config
    }
    pub fn extensions(&self) -> &BTreeMap<String, Vec<String>> {
        &self.snapshot.extensions
    }
    pub fn adopt(&mut self, defaults: crate::config::Defaults) {
        self.snapshot.config.defaults = defaults;
    }

    /// games of `config`, in key order, that the manifest lacks.
    /// games are compared by content, not by key.
    pub fn missing(&self, config: &ExperimentConfig) -> Vec<GameConfig> {
        config
            .ordered()
            .into_iter()
            .map(|(_, game)| game)
            .filter(|game| !self.config().games.values().any(|known| known == *game))
            .cloned()
            .collect()
    }
    /// append games under `gameN` keys above the highest one in use,
    /// recording them as written under `suffix`. titles name the CSV
    /// rows, so they must stay unique among the games of one suffix.
    pub fn extend(&mut self, suffix: &str, games: Vec<GameConfig>) -> Result<(), Error> {
        let mut titles = match self.extensions().contains_key(suffix) {
            true => self.games(suffix).iter().map(GameConfig::title).collect(),
            false => BTreeSet::new(),
        };
        if let Some(game) = games.iter().find(|game| !titles.insert(game.title())) {
            return Err(Error::Config(format!(
                "title {} is already used under suffix {:?}, rename the game or pick another suffix",
                game.title(),
                suffix
            )));
        }
        let top = self
            .config()
            .games
            .keys()
            .map(|key| ExperimentConfig::ordinal(key))
            .filter(|n| *n != usize::MAX)
            .max()
            .unwrap_or_default();
        for (i, game) in games.into_iter().enumerate() {
            let key = format!("game{}", top + i + 1);
            log::info!("manifest gains {} ({}) under suffix {:?}", key, game.title(), suffix);
            self.snapshot.config.games.insert(key.clone(), game);
            self.snapshot
                .extensions
                .entry(suffix.to_string())
                .or_default()
                .push(key);
        }
        Ok(())
    }
    /// games whose files carry `suffix`: the ones an extension added
    /// under it, or every original game otherwise
    pub fn games(&self, suffix: &str) -> Vec<GameConfig> {
        let extension = self.extensions().get(suffix);
        self.config()
            .ordered()
            .into_iter()
            .filter(|(key, _)| match extension {
                Some(keys) => keys.contains(key),
                None => !self.extensions().values().flatten().any(|k| k == *key),
            })
            .map(|(_, game)| game.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(names: &[&str]) -> ExperimentConfig {
        let games = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                format!(
                    r#""game{}": {{"name": "{}", "matrix": [[1, 0], [0, 1]], "algos": ["UCB", "UCB"], "noise": [0, 0.1]}}"#,
                    i + 1,
                    name
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        serde_json::from_str(&format!(
            r#"{{"defaults": {{"runs": 1, "horizon": 5, "player": 2, "seed": 0, "save_folder": "out"}}, "games": {{{}}}}}"#,
            games
        ))
        .unwrap()
    }

    fn names(games: Vec<GameConfig>) -> Vec<String> {
        games.into_iter().map(|g| g.name).collect()
    }

    #[test]
    fn missing_compares_by_value() {
        let manifest = Manifest::new(Path::new("x"), config(&["a", "b"]));
        assert!(manifest.missing(&config(&["a", "b"])).is_empty());
        assert_eq!(names(manifest.missing(&config(&["b", "c"]))), vec!["c"]);
    }

    #[test]
    fn extend_uses_fresh_keys() {
        let mut manifest = Manifest::new(Path::new("x"), config(&["a", "b"]));
        let missing = manifest.missing(&config(&["c", "d"]));
        manifest.extend("_x", missing).unwrap();
        let keys = manifest
            .config()
            .ordered()
            .into_iter()
            .map(|(k, _)| k.clone())
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["game1", "game2", "game3", "game4"]);
        assert_eq!(manifest.extensions()["_x"], vec!["game3", "game4"]);
    }

    #[test]
    fn games_split_by_suffix() {
        let mut manifest = Manifest::new(Path::new("x"), config(&["a", "b"]));
        manifest.extend("_x", manifest.missing(&config(&["c"]))).unwrap();
        assert_eq!(names(manifest.games("")), vec!["a", "b"]);
        assert_eq!(names(manifest.games("_x")), vec!["c"]);
        assert_eq!(names(manifest.games("_unused")), vec!["a", "b"]);
    }

    #[test]
    fn survives_disk() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Manifest::load(dir.path()).unwrap().is_none());
        let mut manifest = Manifest::new(dir.path(), config(&["a"]));
        manifest.extend("_x", manifest.missing(&config(&["b"]))).unwrap();
        manifest.save().unwrap();
        assert_eq!(Manifest::load(dir.path()).unwrap(), Some(manifest));
        let path = dir.path().join("config.yaml");
        assert!(ExperimentConfig::load(&path).is_ok());
    }

    #[test]
    fn extension_titles_stay_unique_per_suffix() {
        let mut manifest = Manifest::new(Path::new("x"), config(&["a"]));
        manifest.extend("_x", manifest.missing(&config(&["b"]))).unwrap();
        let b = manifest.games("_x").remove(0);
        let mut corrected = b.clone();
        corrected.constants = vec![Some(1.), None];
        let before = manifest.clone();
        assert!(matches!(
            manifest.extend("_x", vec![corrected.clone()]),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            manifest.extend("_z", vec![b, corrected.clone()]),
            Err(Error::Config(_))
        ));
        assert_eq!(manifest, before);
        manifest.extend("_y", vec![corrected]).unwrap();
        assert_eq!(names(manifest.games("_y")), vec!["b"]);
    }
}
