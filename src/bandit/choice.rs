use crate::Arm;

/// Outcome of one policy decision.
///
/// `exploring` is set whenever the chosen arm is not among
/// the greedy maximizers of the policy's own estimate,
/// and always during warmup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub arm: Arm,
    pub exploring: bool,
}

impl Choice {
    pub fn forced(arm: Arm) -> Self {
        Self {
            arm,
            exploring: true,
        }
    }
    pub fn against(arm: Arm, greedy: &[Arm]) -> Self {
        Self {
            arm,
            exploring: !greedy.contains(&arm),
        }
    }
}
