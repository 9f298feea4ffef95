use std::collections::HashMap;

use chrono::{DateTime, Days, Local, Utc};
use serde::Serialize;
use tracing::{instrument, warn};

use crate::entities::LogRecord;

use super::bucket::{bucket_key, BucketUnit};

/// One bar of the chart. `date` is the canonical bucket key, see
/// [bucket_key].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub count: u64,
}

/// Result of [aggregate_logs]. `skipped` counts records whose timestamp
/// could not be bucketed, it is surfaced so the UI can tell the user the
/// chart is incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    pub points: Vec<ChartPoint>,
    pub skipped: usize,
}

/// Counts log records per bucket at the requested granularity and returns
/// the buckets in ascending chronological order. The series is sparse,
/// buckets without a single record are not emitted.
///
/// Input order doesn't matter and records with an unrepresentable
/// `action_date` are skipped instead of corrupting a key.
#[instrument(skip(logs))]
pub fn aggregate_logs(logs: &[LogRecord], unit: BucketUnit) -> Aggregation {
    let mut map = HashMap::<String, u64>::new();
    let mut skipped = 0usize;

    for record in logs {
        let Some(key) = bucket_key(record.action_date, unit) else {
            warn!(
                "Skipping log {} with unrepresentable actionDate {}",
                record.id, record.action_date
            );
            skipped += 1;
            continue;
        };
        *map.entry(key).or_insert(0) += 1;
    }

    let mut points = map
        .into_iter()
        .map(|(date, count)| ChartPoint { date, count })
        .collect::<Vec<_>>();
    // Zero padded keys sort lexicographically in chronological order.
    points.sort_by(|a, b| a.date.cmp(&b.date));

    Aggregation { points, skipped }
}

/// Keeps records whose `action_date` lies in the inclusive `[from, to]`
/// millisecond range. Either bound may be absent.
pub fn filter_by_range(
    logs: &[LogRecord],
    from_ms: Option<i64>,
    to_ms: Option<i64>,
) -> Vec<LogRecord> {
    logs.iter()
        .filter(|record| from_ms.map_or(true, |from| record.action_date >= from))
        .filter(|record| to_ms.map_or(true, |to| record.action_date <= to))
        .cloned()
        .collect()
}

/// Summary line shown under the chart: total records and the moment of the
/// most recent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogStats {
    pub count: usize,
    /// `action_date` of the latest record, if any.
    pub last_action: Option<i64>,
}

pub fn log_stats(logs: &[LogRecord]) -> LogStats {
    LogStats {
        count: logs.len(),
        last_action: logs.iter().map(|record| record.action_date).max(),
    }
}

/// Per-day counts for the trailing `days` local calendar days ending at the
/// day containing `today`. Used for the per-item sparkline on the home
/// screen. Unlike [aggregate_logs] the result is zero filled, one slot per
/// day, oldest first.
pub fn recent_daily_counts(logs: &[LogRecord], days: u32, today: DateTime<Local>) -> Vec<u64> {
    if days == 0 {
        return vec![];
    }
    // The window is a range of calendar dates, not of instants. Days
    // shortened or stretched by DST transitions would throw absolute-time
    // arithmetic off by a day, so everything below works on [NaiveDate].
    let today_date = today.date_naive();
    let window_start = today_date - Days::new(u64::from(days) - 1);

    let mut counts = vec![0u64; days as usize];
    for record in logs {
        let Some(moment) = DateTime::<Utc>::from_timestamp_millis(record.action_date) else {
            continue;
        };
        let date = moment.with_timezone(&Local).date_naive();
        if date < window_start || date > today_date {
            continue;
        }
        let offset = (date - window_start).num_days();
        counts[offset as usize] += 1;
    }
    counts
}
