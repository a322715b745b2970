use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of an activity's contribution to the working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Productive,
    Support,
    DeadTime,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityType::Productive => write!(f, "productive"),
            ActivityType::Support => write!(f, "support"),
            ActivityType::DeadTime => write!(f, "dead_time"),
        }
    }
}

/// A single recurring task performed by the holders of a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    /// Duration of one occurrence, in minutes.
    pub time_minutes: f64,
    /// Occurrences per working day.
    pub frequency: u32,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Why the time is lost. Only meaningful for `ActivityType::DeadTime`.
    #[serde(default)]
    pub cause: Option<String>,
}

impl Activity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        time_minutes: f64,
        frequency: u32,
        activity_type: ActivityType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            time_minutes,
            frequency,
            activity_type,
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Minutes consumed by this activity over one working day.
    pub fn daily_minutes(&self) -> f64 {
        self.time_minutes * f64::from(self.frequency)
    }
}
