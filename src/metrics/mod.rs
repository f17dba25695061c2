//! Durable metric rows and their per-run tabular form.

mod ledger;
mod metric;
mod row;
mod table;

pub use ledger::*;
pub use metric::*;
pub use row::*;
pub use table::*;
