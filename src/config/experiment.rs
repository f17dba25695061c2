use super::*;
use crate::Error;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

/// Full experiment configuration: shared defaults plus named games.
///
/// games are keyed `game1`, `game2`, ... and ordered by the
/// numeric part of their key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub defaults: Defaults,
    pub games: BTreeMap<String, GameConfig>,
}

impl ExperimentConfig {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
    /// numeric position of a `gameN` key
    pub fn ordinal(key: &str) -> usize {
        key.trim_start_matches(|c: char| !c.is_ascii_digit())
            .parse()
            .unwrap_or(usize::MAX)
    }
    /// games in numeric key order
    pub fn ordered(&self) -> Vec<(&String, &GameConfig)> {
        let mut games = self.games.iter().collect::<Vec<_>>();
        games.sort_by_key(|(key, _)| (Self::ordinal(key), key.as_str()));
        games
    }
    pub fn validate(&self) -> Result<(), Error> {
        if self.defaults.horizon == 0 {
            return Err(Error::Config("horizon must be positive".into()));
        }
        if self.games.is_empty() {
            return Err(Error::Config("no games configured".into()));
        }
        let mut titles = BTreeSet::new();
        for (key, game) in self.ordered() {
            game.validate(self.defaults.player)?;
            if !titles.insert(game.title()) {
                return Err(Error::Config(format!("{} duplicates title {:?}", key, game.title())));
            }
        }
        Ok(())
    }
}
