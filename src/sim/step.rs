use crate::Arm;
use crate::Reward;

/// Everything observed in one joint round.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub actions: Vec<Arm>,
    pub exploring: Vec<bool>,
    pub rewards: Vec<Reward>,
    pub regret: Reward,
}
