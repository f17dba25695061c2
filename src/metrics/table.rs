use super::*;
use crate::Reward;
use crate::Run;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Long per-run table: one line per (title, instance, timestep),
/// one column per (metric, agent).
///
/// a complete table has exactly games × horizon data lines, which
/// is what the resume logic checks before trusting a CSV on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    header: Vec<String>,
    lines: BTreeMap<(String, Run, usize), BTreeMap<String, Reward>>,
    arms: BTreeMap<String, usize>,
}

impl Table {
    pub const LEADING: [&'static str; 3] = ["title", "n_actions", "time_step"];

    pub fn len(&self) -> usize {
        self.lines.len()
    }
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
    pub fn header(&self) -> &[String] {
        &self.header
    }
    pub fn render(&self) -> String {
        let mut out = String::new();
        let columns = Self::LEADING
            .iter()
            .map(|s| s.to_string())
            .chain(self.header.iter().cloned())
            .collect::<Vec<_>>();
        let _ = writeln!(out, "{}", columns.join(","));
        for ((title, _, t), cells) in &self.lines {
            let arms = self.arms.get(title).copied().unwrap_or_default();
            let _ = write!(out, "{},{},{}", escape(title), arms, t);
            for column in &self.header {
                let _ = match cells.get(column) {
                    Some(v) => write!(out, ",{}", v),
                    None => write!(out, ","),
                };
            }
            out.push('\n');
        }
        out
    }
}

/// reshape wide per-agent rows into the long table
impl From<&Ledger> for Table {
    fn from(ledger: &Ledger) -> Self {
        let mut header = Vec::<String>::new();
        let mut lines = BTreeMap::<(String, Run, usize), BTreeMap<String, Reward>>::new();
        let mut arms = BTreeMap::new();
        for row in ledger.rows() {
            arms.insert(row.title.clone(), row.n_actions);
            for metric in Metric::ALL {
                let column = format!("{}_{}", metric.name(), row.player);
                if !header.contains(&column) {
                    header.push(column);
                }
            }
            for (metric, t, value) in row.values() {
                lines
                    .entry((row.title.clone(), row.instance, t))
                    .or_default()
                    .insert(format!("{}_{}", metric.name(), row.player), value);
            }
        }
        Self {
            header,
            lines,
            arms,
        }
    }
}

fn escape(field: &str) -> String {
    match field.contains([',', '"', '\n']) {
        true => format!("\"{}\"", field.replace('"', "\"\"")),
        false => field.to_string(),
    }
}
