use super::*;
use crate::Error;
use crate::Run;
use crate::sim::Trace;
use serde::Deserialize;
use serde::Serialize;

/// All metric rows accumulated for one run, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger(Vec<MetricRow>);

impl Ledger {
    pub fn rows(&self) -> &[MetricRow] {
        &self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// flatten a trace into per-agent rows, growing rows that already exist
    pub fn record(
        &mut self,
        title: &str,
        instance: Run,
        n_actions: usize,
        trace: &Trace,
    ) -> Result<(), Error> {
        for (i, series) in trace.agents().iter().enumerate() {
            let player = format!("agent_{}", i);
            match self
                .0
                .iter_mut()
                .find(|row| row.key() == (title, player.as_str(), instance))
            {
                Some(row) => row.absorb(trace.start(), series)?,
                None => self.0.push(MetricRow::flatten(
                    title,
                    &player,
                    instance,
                    n_actions,
                    trace.start(),
                    series,
                )?),
            }
        }
        Ok(())
    }
    /// recorded timesteps per metric, taken from the first row
    pub fn lengths(&self) -> Vec<(Metric, usize)> {
        Metric::ALL
            .into_iter()
            .map(|m| (m, self.0.first().map(|row| row.len(m)).unwrap_or_default()))
            .collect()
    }
}

impl From<Vec<MetricRow>> for Ledger {
    fn from(rows: Vec<MetricRow>) -> Self {
        Self(rows)
    }
}
