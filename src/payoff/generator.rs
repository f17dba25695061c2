use super::Matrix;
use super::Tensor;
use crate::Arm;
use crate::Error;
use crate::Reward;
use serde::Deserialize;
use serde::Serialize;

/// Expansion of a KxK base matrix into N-player payoff tensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Generator {
    /// M[a, a] when everyone plays a, else 0
    Diagonal,
    /// M[a, a] when everyone plays a, 0 when both extreme arms
    /// are played, `PARTIAL_PAYOFF` otherwise
    General,
    /// n-player prisoner's dilemma from a 2x2 matrix,
    /// arm 0 cooperates and arm 1 betrays
    PrisonersDilemma,
}

impl Generator {
    /// diagonal base matrices coordinate on the diagonal only
    pub fn detect(rows: &[Vec<Reward>]) -> Self {
        match Matrix::is_diagonal(rows) {
            true => Self::Diagonal,
            false => Self::General,
        }
    }

    /// one tensor per agent
    pub fn expand(self, rows: &[Vec<Reward>], players: usize) -> Result<Vec<Tensor>, Error> {
        let arms = Matrix::square(rows)?;
        match self {
            Self::Diagonal => Ok(vec![Tensor::from_fn(players, arms, |j| Self::diagonal(rows, j)); players]),
            Self::General => Ok(vec![Tensor::from_fn(players, arms, |j| Self::general(rows, j)); players]),
            Self::PrisonersDilemma if arms == 2 => Ok((0..players)
                .map(|i| Tensor::from_fn(players, arms, |j| Self::dilemma(rows, j, i)))
                .collect()),
            Self::PrisonersDilemma => Err(Error::Config(
                "prisoner's dilemma needs a 2x2 base matrix".into(),
            )),
        }
    }

    fn coordinated(joint: &[Arm]) -> Option<Arm> {
        match joint.iter().all(|a| *a == joint[0]) {
            true => Some(joint[0]),
            false => None,
        }
    }

    fn diagonal(rows: &[Vec<Reward>], joint: &[Arm]) -> Reward {
        Self::coordinated(joint).map(|a| rows[a][a]).unwrap_or(0.)
    }

    fn general(rows: &[Vec<Reward>], joint: &[Arm]) -> Reward {
        let last = rows.len() - 1;
        match Self::coordinated(joint) {
            Some(a) => rows[a][a],
            None if joint.contains(&0) && joint.contains(&last) => 0.,
            None => crate::PARTIAL_PAYOFF,
        }
    }

    fn dilemma(rows: &[Vec<Reward>], joint: &[Arm], me: usize) -> Reward {
        let n = joint.len();
        let betrayals = joint.iter().filter(|a| **a == 1).count();
        let others = betrayals - joint[me];
        match (joint[me], betrayals, others) {
            (_, 0, _) => rows[0][0],
            (_, b, _) if b == n => rows[1][1],
            (1, _, 0) => rows[1][0],
            (0, _, o) if o == n - 1 => rows[0][1],
            (1, _, _) => (1. + rows[0][0]) / 2.,
            _ => rows[1][1] / 2.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordination() -> Vec<Vec<Reward>> {
        vec![vec![1., 0., 0.], vec![0., 0.6, 0.], vec![0., 0., 0.8]]
    }

    #[test]
    fn diagonal_pays_only_on_agreement() {
        let tensors = Generator::Diagonal.expand(&coordination(), 3).unwrap();
        assert_eq!(tensors.len(), 3);
        assert_eq!(tensors[0].get(&[1, 1, 1]), 0.6);
        assert_eq!(tensors[2].get(&[1, 1, 2]), 0.);
        assert_eq!(tensors[0], tensors[1]);
    }

    #[test]
    fn general_penalizes_extremes() {
        let tensors = Generator::General.expand(&coordination(), 2).unwrap();
        assert_eq!(tensors[0].get(&[2, 2]), 0.8);
        assert_eq!(tensors[0].get(&[0, 2]), 0.);
        assert_eq!(tensors[0].get(&[2, 0]), 0.);
        assert_eq!(tensors[0].get(&[0, 1]), crate::PARTIAL_PAYOFF);
        assert_eq!(tensors[0].get(&[1, 2]), crate::PARTIAL_PAYOFF);
    }

    #[test]
    fn dilemma_distinguishes_agents() {
        let base = vec![vec![3., 0.], vec![5., 1.]];
        let tensors = Generator::PrisonersDilemma.expand(&base, 3).unwrap();
        assert_eq!(tensors[0].get(&[0, 0, 0]), 3.);
        assert_eq!(tensors[0].get(&[1, 1, 1]), 1.);
        assert_eq!(tensors[0].get(&[1, 0, 0]), 5.);
        assert_eq!(tensors[1].get(&[1, 0, 0]), 0.5);
        assert_eq!(tensors[0].get(&[0, 1, 1]), 0.);
        assert_eq!(tensors[1].get(&[1, 1, 0]), 2.);
        assert!(Generator::PrisonersDilemma.expand(&coordination(), 2).is_err());
    }

    #[test]
    fn detection_follows_off_diagonal() {
        assert_eq!(Generator::detect(&coordination()), Generator::Diagonal);
        assert_eq!(Generator::detect(&[vec![1., 0.2], vec![0.2, 1.]]), Generator::General);
    }
}
