//! Payoff tensors and the reward/regret model of a game.

mod generator;
mod matrix;
mod model;
mod noise;
mod tensor;

pub use generator::*;
pub use matrix::*;
pub use model::*;
pub use noise::*;
pub use tensor::*;
