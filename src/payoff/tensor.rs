use crate::Arm;
use crate::Error;
use crate::Reward;
use serde::Deserialize;
use serde::Serialize;

/// Dense K^N payoff array indexed by joint action.
///
/// stored row-major: the first agent's action is the
/// slowest-varying coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tensor {
    arms: usize,
    players: usize,
    values: Vec<Reward>,
}

impl Tensor {
    pub fn from_fn<F>(players: usize, arms: usize, f: F) -> Self
    where
        F: Fn(&[Arm]) -> Reward,
    {
        let values = Self::joints(players, arms).map(|joint| f(&joint)).collect();
        Self {
            arms,
            players,
            values,
        }
    }
    /// every joint action in storage order
    pub fn joints(players: usize, arms: usize) -> impl Iterator<Item = Vec<Arm>> {
        let size = arms.pow(players as u32);
        (0..size).map(move |mut flat| {
            let mut joint = vec![0; players];
            for slot in joint.iter_mut().rev() {
                *slot = flat % arms;
                flat /= arms;
            }
            joint
        })
    }
    pub fn arms(&self) -> usize {
        self.arms
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn values(&self) -> &[Reward] {
        &self.values
    }
    pub fn get(&self, joint: &[Arm]) -> Reward {
        debug_assert_eq!(joint.len(), self.players);
        let index = joint.iter().fold(0, |index, &a| index * self.arms + a);
        self.values[index]
    }
    pub fn max(&self) -> Reward {
        self.values.iter().copied().fold(Reward::NEG_INFINITY, Reward::max)
    }
    pub fn min(&self) -> Reward {
        self.values.iter().copied().fold(Reward::INFINITY, Reward::min)
    }
    /// elementwise minimum of two tensors of equal shape
    pub fn minimum(&self, other: &Self) -> Self {
        assert_eq!(self.values.len(), other.values.len(), "tensor shapes differ");
        self.map_with(other, Reward::min)
    }
    fn map_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(Reward, Reward) -> Reward,
    {
        Self {
            arms: self.arms,
            players: self.players,
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| f(*a, *b))
                .collect(),
        }
    }
    fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Reward) -> Reward,
    {
        Self {
            arms: self.arms,
            players: self.players,
            values: self.values.iter().map(|v| f(*v)).collect(),
        }
    }
    /// linear rescale into [slack/2, 1 - slack/2]
    pub fn normalize(&self, slack: Reward) -> Result<Self, Error> {
        let lo = self.min();
        let range = self.max() - lo;
        match range > 0. {
            false => Err(Error::DegeneratePayoff),
            true => Ok(self.map(|v| (v - lo) / range * (1. - slack) + slack / 2.)),
        }
    }
    /// gap to the best value of the tensor
    pub fn shortfall(&self) -> Self {
        let best = self.max();
        self.map(|v| best - v)
    }
    /// parse a nested JSON array of depth N with K entries per level
    pub fn from_nested(value: &serde_json::Value) -> Result<Self, Error> {
        let mut shape = Vec::new();
        let mut cursor = value;
        while let Some(items) = cursor.as_array() {
            shape.push(items.len());
            cursor = items
                .first()
                .ok_or_else(|| Error::Config("empty payoff tensor".into()))?;
        }
        let arms = *shape
            .first()
            .ok_or_else(|| Error::Config("payoff tensor must be an array".into()))?;
        if shape.iter().any(|k| *k != arms) {
            return Err(Error::Config(format!("payoff tensor is not cubic: {:?}", shape)));
        }
        let mut values = Vec::with_capacity(arms.pow(shape.len() as u32));
        Self::flatten(value, shape.len(), arms, &mut values)?;
        Ok(Self {
            arms,
            players: shape.len(),
            values,
        })
    }
    fn flatten(
        value: &serde_json::Value,
        depth: usize,
        arms: usize,
        out: &mut Vec<Reward>,
    ) -> Result<(), Error> {
        match (depth, value) {
            (0, v) => v
                .as_f64()
                .map(|x| out.push(x))
                .ok_or_else(|| Error::Config(format!("non-numeric payoff {}", v))),
            (d, serde_json::Value::Array(items)) if items.len() == arms => items
                .iter()
                .try_for_each(|item| Self::flatten(item, d - 1, arms, out)),
            _ => Err(Error::Config("ragged payoff tensor".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joints_are_row_major() {
        let joints = Tensor::joints(2, 3).collect::<Vec<_>>();
        assert_eq!(joints.len(), 9);
        assert_eq!(joints[0], vec![0, 0]);
        assert_eq!(joints[1], vec![0, 1]);
        assert_eq!(joints[3], vec![1, 0]);
        assert_eq!(joints[8], vec![2, 2]);
    }

    #[test]
    fn get_inverts_from_fn() {
        let tensor = Tensor::from_fn(3, 2, |j| (j[0] * 4 + j[1] * 2 + j[2]) as Reward);
        assert_eq!(tensor.get(&[1, 0, 1]), 5.);
        assert_eq!(tensor.get(&[0, 1, 1]), 3.);
    }

    #[test]
    fn normalize_spans_slack_interval() {
        let tensor = Tensor::from_fn(2, 2, |j| (j[0] + j[1]) as Reward * 5.);
        let unit = tensor.normalize(0.).unwrap();
        assert_eq!((unit.min(), unit.max()), (0., 1.));
        let narrowed = tensor.normalize(0.2).unwrap();
        assert!((narrowed.min() - 0.1).abs() < 1e-12);
        assert!((narrowed.max() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn constant_tensor_cannot_normalize() {
        let flat = Tensor::from_fn(2, 2, |_| 1.);
        assert!(matches!(flat.normalize(0.), Err(Error::DegeneratePayoff)));
    }

    #[test]
    fn nested_arrays_parse() {
        let value = serde_json::json!([[1.0, 0.0], [0.0, 0.5]]);
        let tensor = Tensor::from_nested(&value).unwrap();
        assert_eq!((tensor.players(), tensor.arms()), (2, 2));
        assert_eq!(tensor.get(&[1, 1]), 0.5);
        assert!(Tensor::from_nested(&serde_json::json!([[1.0, 0.0], [0.0]])).is_err());
        assert!(Tensor::from_nested(&serde_json::json!([[1.0, 0.0, 2.0], [0.0, 1.0, 2.0]])).is_err());
    }
}
