use crate::entities::{Goal, GoalDirection, GoalPeriod};

use super::bucket::BucketUnit;

/// Fixed conversion ratios. A month is approximated as 30 days, the charts
/// need a stable reference line rather than calendar-exact scaling.
const DAYS_PER_WEEK: f64 = 7.;
const DAYS_PER_MONTH: f64 = 30.;

/// Scales a goal value from the period it's defined in into the unit the
/// chart is currently displayed in, rounded to 2 decimal places. "3 per
/// week" viewed on a daily chart becomes a 0.43 reference line.
///
/// Without a goal there is nothing to normalize, callers simply omit the
/// reference line.
pub fn normalize_goal(goal: &Goal, display: BucketUnit) -> f64 {
    let scaled = match (goal.period, display) {
        (GoalPeriod::Day, BucketUnit::Day)
        | (GoalPeriod::Week, BucketUnit::Week)
        | (GoalPeriod::Month, BucketUnit::Month) => goal.value,
        (GoalPeriod::Day, BucketUnit::Week) => goal.value * DAYS_PER_WEEK,
        (GoalPeriod::Day, BucketUnit::Month) => goal.value * DAYS_PER_MONTH,
        (GoalPeriod::Week, BucketUnit::Day) => goal.value / DAYS_PER_WEEK,
        (GoalPeriod::Week, BucketUnit::Month) => goal.value * DAYS_PER_MONTH / DAYS_PER_WEEK,
        (GoalPeriod::Month, BucketUnit::Day) => goal.value / DAYS_PER_MONTH,
        (GoalPeriod::Month, BucketUnit::Week) => goal.value / DAYS_PER_MONTH * DAYS_PER_WEEK,
    };
    round2(scaled)
}

// Round half up. Values are non-negative so round() behaves like the
// half-up rounding of the scaled value.
fn round2(value: f64) -> f64 {
    (value * 100.).round() / 100.
}

/// Short human readable goal summary, e.g. "At least 3 per day".
pub fn format_goal(goal: &Goal) -> String {
    let direction = match goal.direction {
        GoalDirection::AtLeast => "At least",
        GoalDirection::AtMost => "At most",
    };
    let period = match goal.period {
        GoalPeriod::Day => "per day",
        GoalPeriod::Week => "per week",
        GoalPeriod::Month => "per month",
    };
    format!("{direction} {} {period}", goal.value)
}
