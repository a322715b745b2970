use super::matched_pairs;
use crate::model::{Activity, Area};
use ahash::AHashMap;
use serde::Serialize;

/// Relative change of an activity's daily minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentChange {
    Finite(f64),
    /// The activity had no minutes in the base capture and has some now.
    New,
}

impl PercentChange {
    pub fn between(base_minutes: f64, current_minutes: f64) -> Self {
        if base_minutes == 0.0 {
            if current_minutes == 0.0 {
                PercentChange::Finite(0.0)
            } else {
                PercentChange::New
            }
        } else {
            PercentChange::Finite((current_minutes - base_minutes) / base_minutes * 100.0)
        }
    }

    pub fn as_finite(&self) -> Option<f64> {
        match self {
            PercentChange::Finite(value) => Some(*value),
            PercentChange::New => None,
        }
    }
}

/// Daily-minute change of one activity present in both captures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDelta {
    pub area_name: String,
    pub position_id: String,
    pub activity_id: String,
    pub activity_name: String,
    pub base_minutes: f64,
    pub current_minutes: f64,
    pub minutes_delta: f64,
    pub percent_change: PercentChange,
}

fn keyed_activities(area: &Area) -> AHashMap<(&str, &str), &Activity> {
    let mut keyed = AHashMap::new();
    for position in &area.positions {
        for activity in &position.activities {
            keyed
                .entry((position.id.as_str(), activity.id.as_str()))
                .or_insert(activity);
        }
    }
    keyed
}

/// Activity-level deltas for same-named areas.
///
/// Activities are matched by `(position id, activity id)`; activities on only
/// one side are ignored. Rows follow the base capture's order.
pub fn compare_activities(base: &[Area], current: &[Area]) -> Vec<ActivityDelta> {
    let mut deltas = Vec::new();
    for (base_area, current_area) in matched_pairs(base, current) {
        let current_activities = keyed_activities(current_area);
        for position in &base_area.positions {
            for activity in &position.activities {
                let Some(current_activity) =
                    current_activities.get(&(position.id.as_str(), activity.id.as_str()))
                else {
                    continue;
                };
                let base_minutes = activity.daily_minutes();
                let current_minutes = current_activity.daily_minutes();
                deltas.push(ActivityDelta {
                    area_name: base_area.area_name.clone(),
                    position_id: position.id.clone(),
                    activity_id: activity.id.clone(),
                    activity_name: current_activity.name.clone(),
                    base_minutes,
                    current_minutes,
                    minutes_delta: current_minutes - base_minutes,
                    percent_change: PercentChange::between(base_minutes, current_minutes),
                });
            }
        }
    }
    deltas
}
