use crate::Error;
use crate::Reward;
use crate::bandit::Algorithm;
use crate::payoff::*;
use crate::random::Entropy;
use crate::sim::Environment;
use serde::Deserialize;
use serde::Serialize;

fn normal() -> String {
    "normal".to_string()
}

/// One game of an experiment: payoffs, policies and noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub name: String,
    pub matrix: Matrix,
    pub algos: Vec<Algorithm>,
    /// [mean, variance]
    pub noise: [Reward; 2],
    #[serde(default = "normal")]
    pub distribution: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constants: Vec<Option<Reward>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<Generator>,
}

impl GameConfig {
    /// `{algos joined by ×}_{mean}_{variance}_{name}`
    pub fn title(&self) -> String {
        let algos = self
            .algos
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join("×");
        format!("{}_{}_{}_{}", algos, self.noise[0], self.noise[1], self.name)
    }
    pub fn noise(&self) -> Result<Noise, Error> {
        Noise::new(&self.distribution, self.noise[0], self.noise[1])
    }
    pub fn model(&self, players: usize) -> Result<PayoffModel, Error> {
        PayoffModel::build(&self.matrix, self.generator, players)
    }
    pub fn arms(&self) -> Result<usize, Error> {
        self.matrix.arms()
    }
    pub fn validate(&self, players: usize) -> Result<(), Error> {
        if self.algos.len() != players {
            return Err(Error::Config(format!(
                "game {:?} lists {} algorithms for {} players",
                self.name,
                self.algos.len(),
                players
            )));
        }
        if self.constants.len() > players {
            return Err(Error::Config(format!(
                "game {:?} lists more constants than players",
                self.name
            )));
        }
        self.noise()?;
        self.model(players)?;
        Ok(())
    }
    /// fresh environment for one run; draws warmup permutations from `rng`
    pub fn environment(&self, players: usize, rng: &mut Entropy) -> Result<Environment, Error> {
        Ok(Environment::new(
            self.model(players)?,
            self.noise()?,
            &self.algos,
            &self.constants,
            rng,
        ))
    }
}
