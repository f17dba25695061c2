use super::Tensor;
use crate::Error;
use crate::Reward;
use serde::Deserialize;
use serde::Serialize;

/// Payoff description as it appears in a game configuration.
///
/// either a KxK base matrix that a `Generator` expands to
/// N players, or one pre-expanded N-dimensional tensor per agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Matrix {
    Base(Vec<Vec<Reward>>),
    Expanded(Vec<serde_json::Value>),
}

impl Matrix {
    pub fn arms(&self) -> Result<usize, Error> {
        match self {
            Self::Base(rows) => Ok(rows.len()),
            Self::Expanded(tensors) => tensors
                .first()
                .ok_or_else(|| Error::Config("no payoff tensors".into()))
                .and_then(Tensor::from_nested)
                .map(|t| t.arms()),
        }
    }
    /// base matrix rows, checked to be square and non-empty
    pub fn square(rows: &[Vec<Reward>]) -> Result<usize, Error> {
        let k = rows.len();
        match k > 0 && rows.iter().all(|row| row.len() == k) {
            true => Ok(k),
            false => Err(Error::Config("base payoff matrix must be square".into())),
        }
    }
    /// off-diagonal entries all (numerically) zero
    pub fn is_diagonal(rows: &[Vec<Reward>]) -> bool {
        rows.iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, v)| (i, j, *v)))
            .filter(|(i, j, _)| i != j)
            .all(|(_, _, v)| v.abs() <= 1e-8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_forms_are_distinguished() {
        let base = serde_json::from_str::<Matrix>("[[1, 0], [0, 1]]").unwrap();
        assert!(matches!(base, Matrix::Base(_)));
        let expanded = serde_json::from_str::<Matrix>("[[[1, 0], [0, 1]], [[1, 0], [0, 1]]]").unwrap();
        assert!(matches!(expanded, Matrix::Expanded(ref t) if t.len() == 2));
        assert_eq!(expanded.arms().unwrap(), 2);
    }

    #[test]
    fn diagonal_detection() {
        assert!(Matrix::is_diagonal(&[vec![1., 0.], vec![0., 0.5]]));
        assert!(!Matrix::is_diagonal(&[vec![1., 0.2], vec![0., 0.5]]));
    }
}
