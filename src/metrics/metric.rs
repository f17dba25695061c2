use crate::Reward;
use crate::sim::Series;

/// The four per-agent, per-round time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Play,
    Reward,
    Regret,
    Exploration,
}

impl Metric {
    pub const ALL: [Self; 4] = [Self::Play, Self::Reward, Self::Regret, Self::Exploration];

    /// short name used in CSV headers
    pub fn name(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Reward => "reward",
            Self::Regret => "regret",
            Self::Exploration => "exploration",
        }
    }
    /// prefix of the wide-row column keys
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Play => "play_time",
            Self::Reward => "reward_time",
            Self::Regret => "regret_time",
            Self::Exploration => "exploration_time",
        }
    }
    /// wide-row key for absolute timestep `t`
    pub fn column(self, t: usize) -> String {
        format!("{}{}", self.prefix(), t)
    }
    /// inverse of `column`
    pub fn parse(column: &str) -> Option<(Self, usize)> {
        let prefix = column.trim_end_matches(|c: char| c.is_ascii_digit());
        let t = column[prefix.len()..].parse::<usize>().ok()?;
        Self::ALL
            .into_iter()
            .find(|m| m.prefix() == prefix)
            .map(|m| (m, t))
    }
    pub fn of(self, series: &Series) -> &[Reward] {
        match self {
            Self::Play => &series.play,
            Self::Reward => &series.reward,
            Self::Regret => &series.regret,
            Self::Exploration => &series.exploration,
        }
    }
}
