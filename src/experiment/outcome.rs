use crate::Run;

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// the user chose to quit at the bootstrap prompt
    Aborted,
    Finished(Summary),
}

/// Per-run decisions taken during one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// games covered by this pass
    pub games: usize,
    /// run whose CSV was rebuilt by the crash-recovery pre-pass
    pub recovered: Option<Run>,
    /// runs that simulated at least one round
    pub simulated: Vec<Run>,
    /// complete runs whose CSV was rebuilt from the checkpoint
    pub healed: Vec<Run>,
    /// complete runs left untouched
    pub skipped: Vec<Run>,
}

impl Outcome {
    pub fn summary(&self) -> Option<&Summary> {
        match self {
            Self::Aborted => None,
            Self::Finished(summary) => Some(summary),
        }
    }
}
