//! Computation core for a habit tracking client. Takes timestamped log
//! records that were already fetched by the data layer and turns them into
//! chart-ready day/week/month count series, plus scaling of goals between
//! period units. There is no I/O here, callers rerun aggregation on every
//! snapshot the data layer pushes.
//!

pub mod chart;
pub mod entities;
pub mod utils;

pub use chart::aggregate::{aggregate_logs, Aggregation, ChartPoint};
pub use chart::bucket::BucketUnit;
pub use chart::goal::{format_goal, normalize_goal};
