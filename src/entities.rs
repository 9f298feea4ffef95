use serde::Deserialize;
use serde::Serialize;

/// A single timestamped occurrence of a tracked action. Records come from
/// the backend as JSON documents with camelCase fields, so the serde names
/// match the wire shape. `action_date` is when the action happened, not when
/// the record was created.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub id: String,
    /// Milliseconds since the unix epoch.
    pub action_date: i64,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Whether the user aims to reach the goal value or stay under it. Display
/// information only, aggregation math never looks at it.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum GoalDirection {
    AtLeast,
    AtMost,
}

/// The unit a goal value is expressed in.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    Day,
    Week,
    Month,
}

/// Target frequency attached to an item, e.g. "at least 3 per week".
#[derive(PartialEq, Debug, Serialize, Deserialize, Clone)]
pub struct Goal {
    /// Target count, non-negative.
    pub value: f64,
    pub direction: GoalDirection,
    pub period: GoalPeriod,
}
