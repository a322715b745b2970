use super::Activity;
use serde::{Deserialize, Serialize};

/// A job role inside an area, held by `count` people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub name: String,
    pub count: u32,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Position {
    pub fn new(id: impl Into<String>, name: impl Into<String>, count: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            count,
            activities: Vec::new(),
        }
    }

    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }
}
