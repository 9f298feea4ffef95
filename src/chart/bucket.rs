use std::{fmt::Display, str::FromStr};

use anyhow::anyhow;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use now::DateTimeNow;

/// Granularity of the chart series. Also used as the display unit when
/// scaling goals, see [crate::chart::goal].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BucketUnit {
    Day,
    Week,
    Month,
}

impl Display for BucketUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BucketUnit::Day => write!(f, "days"),
            BucketUnit::Week => write!(f, "weeks"),
            BucketUnit::Month => write!(f, "months"),
        }
    }
}

impl FromStr for BucketUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(BucketUnit::Day),
            "week" => Ok(BucketUnit::Week),
            "month" => Ok(BucketUnit::Month),
            _ => Err(anyhow!(
                "Unknown bucket unit {s:?}, expected one of day, week, month"
            )),
        }
    }
}

/// Truncates a moment to the start of the bucket containing it. Weeks start
/// on Monday 00:00:00, months on the first at 00:00:00.
pub fn bucket_start<Tz: TimeZone>(moment: DateTime<Tz>, unit: BucketUnit) -> DateTime<Tz> {
    match unit {
        BucketUnit::Day => moment.beginning_of_day(),
        BucketUnit::Week => moment.beginning_of_week(),
        BucketUnit::Month => moment.beginning_of_month(),
    }
}

/// Canonical key of the bucket a millisecond timestamp falls into, in the
/// local time zone of the executing environment. Day and week use
/// `YYYY-MM-DD` (for weeks, the Monday starting the week), months use
/// `YYYY-MM`. Keys are zero padded so lexicographic order matches
/// chronological order.
///
/// Returns [None] when the timestamp is outside the representable datetime
/// range; callers treat such records as malformed and skip them.
pub fn bucket_key(action_date_ms: i64, unit: BucketUnit) -> Option<String> {
    let moment = DateTime::<Utc>::from_timestamp_millis(action_date_ms)?.with_timezone(&Local);
    let start = bucket_start(moment, unit);
    Some(match unit {
        BucketUnit::Day | BucketUnit::Week => start.format("%Y-%m-%d").to_string(),
        BucketUnit::Month => start.format("%Y-%m").to_string(),
    })
}

/// Axis label for a bucket key. Day keys are reformatted into the
/// `DD.MM.YYYY` style the charts display, week and month keys are shown as
/// is.
pub fn bucket_label(key: &str, unit: BucketUnit) -> String {
    match unit {
        BucketUnit::Day => NaiveDate::parse_from_str(key, "%Y-%m-%d")
            .map(|date| date.format("%d.%m.%Y").to_string())
            .unwrap_or_else(|_| key.to_owned()),
        BucketUnit::Week | BucketUnit::Month => key.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::{bucket_key, bucket_label, BucketUnit};

    fn local_ms(year: i32, month: u32, day: u32, hour: u32, min: u32) -> i64 {
        Local
            .with_ymd_and_hms(year, month, day, hour, min, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn day_key_ignores_time_of_day() {
        let morning = bucket_key(local_ms(2024, 3, 1, 8, 0), BucketUnit::Day);
        let night = bucket_key(local_ms(2024, 3, 1, 23, 59), BucketUnit::Day);
        assert_eq!(morning.as_deref(), Some("2024-03-01"));
        assert_eq!(morning, night);
    }

    #[test]
    fn week_key_is_the_monday_of_the_week() {
        // 2024-03-04 is a Monday, 2024-03-10 the following Sunday.
        let monday = bucket_key(local_ms(2024, 3, 4, 0, 0), BucketUnit::Week);
        let sunday = bucket_key(local_ms(2024, 3, 10, 23, 59), BucketUnit::Week);
        let next_monday = bucket_key(local_ms(2024, 3, 11, 0, 0), BucketUnit::Week);
        assert_eq!(monday.as_deref(), Some("2024-03-04"));
        assert_eq!(sunday.as_deref(), Some("2024-03-04"));
        assert_eq!(next_monday.as_deref(), Some("2024-03-11"));
    }

    #[test]
    fn month_key_drops_the_day() {
        let first = bucket_key(local_ms(2024, 3, 1, 0, 0), BucketUnit::Month);
        let last = bucket_key(local_ms(2024, 3, 31, 23, 59), BucketUnit::Month);
        assert_eq!(first.as_deref(), Some("2024-03"));
        assert_eq!(first, last);
    }

    #[test]
    fn unrepresentable_timestamp_has_no_key() {
        assert_eq!(bucket_key(i64::MAX, BucketUnit::Day), None);
        assert_eq!(bucket_key(i64::MIN, BucketUnit::Month), None);
    }

    #[test]
    fn unit_parses_from_backend_spelling() {
        assert_eq!("day".parse::<BucketUnit>().unwrap(), BucketUnit::Day);
        assert_eq!("week".parse::<BucketUnit>().unwrap(), BucketUnit::Week);
        assert_eq!("month".parse::<BucketUnit>().unwrap(), BucketUnit::Month);
        assert!("fortnight".parse::<BucketUnit>().is_err());
    }

    #[test]
    fn day_labels_use_dotted_order_other_units_pass_through() {
        assert_eq!(bucket_label("2024-03-01", BucketUnit::Day), "01.03.2024");
        assert_eq!(bucket_label("2024-03-04", BucketUnit::Week), "2024-03-04");
        assert_eq!(bucket_label("2024-03", BucketUnit::Month), "2024-03");
        // An unparsable day key is better shown raw than dropped.
        assert_eq!(bucket_label("garbage", BucketUnit::Day), "garbage");
    }
}
