use crate::Error;
use crate::Reward;
use crate::random::Entropy;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::Deserialize;
use serde::Serialize;

/// Additive reward noise, drawn independently per agent per round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "distribution")]
pub enum Noise {
    #[serde(rename = "normal")]
    Gaussian { mean: Reward, variance: Reward },
}

impl Noise {
    /// fails fast on anything but a Gaussian
    pub fn new(distribution: &str, mean: Reward, variance: Reward) -> Result<Self, Error> {
        match distribution {
            "normal" | "gaussian" if variance >= 0. => Ok(Self::Gaussian { mean, variance }),
            "normal" | "gaussian" => Err(Error::Config(format!("negative noise variance {}", variance))),
            other => Err(Error::UnsupportedDistribution(other.to_string())),
        }
    }
    pub fn mean(&self) -> Reward {
        match self {
            Self::Gaussian { mean, .. } => *mean,
        }
    }
    pub fn variance(&self) -> Reward {
        match self {
            Self::Gaussian { variance, .. } => *variance,
        }
    }
    pub fn sample(&self, rng: &mut Entropy) -> Reward {
        match self {
            Self::Gaussian { mean, variance } => {
                mean + variance.sqrt() * rng.sample::<Reward, _>(StandardNormal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_distribution() {
        assert!(matches!(
            Noise::new("laplace", 0., 1.),
            Err(Error::UnsupportedDistribution(name)) if name == "laplace"
        ));
        assert!(Noise::new("normal", 0., -1.).is_err());
    }

    #[test]
    fn zero_variance_is_deterministic() {
        let noise = Noise::new("normal", 0.25, 0.).unwrap();
        let ref mut rng = Entropy::seeded(1);
        assert!((0..10).all(|_| noise.sample(rng) == 0.25));
    }

    #[test]
    fn sample_moments() {
        let noise = Noise::new("normal", 1., 4.).unwrap();
        let ref mut rng = Entropy::seeded(2);
        let draws = (0..20_000).map(|_| noise.sample(rng)).collect::<Vec<_>>();
        let mean = draws.iter().sum::<Reward>() / draws.len() as Reward;
        let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<Reward>() / draws.len() as Reward;
        assert!((mean - 1.).abs() < 0.1);
        assert!((var - 4.).abs() < 0.3);
    }

    #[test]
    fn serializes_with_distribution_tag() {
        let json = serde_json::to_value(Noise::new("normal", 0., 0.1).unwrap()).unwrap();
        assert_eq!(json["distribution"], "normal");
    }
}
