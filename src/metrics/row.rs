use super::Metric;
use crate::Error;
use crate::Reward;
use crate::Run;
use crate::sim::Series;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Wide row of every metric of one agent in one game of one run.
///
/// keyed by (title, player, instance); columns are
/// `{metric}_time{t}` with absolute timesteps, so rows
/// only ever grow to the right when the horizon is extended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub title: String,
    pub player: String,
    pub instance: Run,
    pub n_actions: usize,
    pub cells: BTreeMap<String, Reward>,
}

impl MetricRow {
    pub fn flatten(
        title: &str,
        player: &str,
        instance: Run,
        n_actions: usize,
        start: usize,
        series: &Series,
    ) -> Result<Self, Error> {
        let mut row = Self {
            title: title.to_string(),
            player: player.to_string(),
            instance,
            n_actions,
            cells: BTreeMap::new(),
        };
        row.absorb(start, series)?;
        Ok(row)
    }
    pub fn key(&self) -> (&str, &str, Run) {
        (&self.title, &self.player, self.instance)
    }
    /// append columns for timesteps start.. without touching earlier ones.
    /// a timestep that is already recorded leaves the row as it was.
    pub fn absorb(&mut self, start: usize, series: &Series) -> Result<(), Error> {
        if let Some(column) = Metric::ALL
            .into_iter()
            .flat_map(|m| (start..start + m.of(series).len()).map(move |t| m.column(t)))
            .find(|column| self.cells.contains_key(column))
        {
            return Err(Error::Config(format!(
                "{} of {} {} run {} recorded twice",
                column, self.title, self.player, self.instance
            )));
        }
        for metric in Metric::ALL {
            for (i, value) in metric.of(series).iter().enumerate() {
                self.cells.insert(metric.column(start + i), *value);
            }
        }
        Ok(())
    }
    /// recorded timesteps of one metric
    pub fn len(&self, metric: Metric) -> usize {
        self.cells
            .keys()
            .filter_map(|k| Metric::parse(k))
            .filter(|(m, _)| *m == metric)
            .count()
    }
    /// (metric, timestep, value) in column order
    pub fn values(&self) -> impl Iterator<Item = (Metric, usize, Reward)> + '_ {
        self.cells
            .iter()
            .filter_map(|(k, v)| Metric::parse(k).map(|(m, t)| (m, t, *v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[Reward]) -> Series {
        Series {
            play: values.to_vec(),
            reward: values.to_vec(),
            regret: values.to_vec(),
            exploration: values.to_vec(),
        }
    }

    #[test]
    fn flatten_uses_absolute_timesteps() {
        let row = MetricRow::flatten("g", "agent_0", 3, 2, 5, &series(&[1., 0.])).unwrap();
        assert_eq!(row.cells.get("play_time5"), Some(&1.));
        assert_eq!(row.cells.get("exploration_time6"), Some(&0.));
        assert_eq!(row.cells.len(), 8);
        assert_eq!(row.key(), ("g", "agent_0", 3));
    }

    #[test]
    fn extension_leaves_existing_columns() {
        let mut row = MetricRow::flatten("g", "agent_1", 0, 2, 0, &series(&[0.1, 0.2, 0.3])).unwrap();
        let before = row.cells.clone();
        row.absorb(3, &series(&[0.4, 0.5])).unwrap();
        for (k, v) in &before {
            assert_eq!(row.cells.get(k), Some(v));
        }
        assert_eq!(row.len(Metric::Reward), 5);
        assert_eq!(row.cells.get("regret_time4"), Some(&0.5));
    }

    #[test]
    fn overlapping_timesteps_are_rejected() {
        let mut row = MetricRow::flatten("g", "agent_0", 0, 2, 0, &series(&[0.1, 0.2, 0.3])).unwrap();
        let before = row.clone();
        assert!(matches!(row.absorb(2, &series(&[0.9, 0.9])), Err(Error::Config(_))));
        assert_eq!(row, before);
    }
}
