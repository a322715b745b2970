use super::percent_of;
use crate::model::{ActivityType, Area};
use ahash::AHashMap;
use itertools::Itertools;
use serde::Serialize;

/// Dead-time minutes attributed to one declared cause.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CauseShare {
    /// `None` groups dead-time activities without a declared cause.
    pub cause: Option<String>,
    pub minutes: f64,
    pub activity_count: usize,
    /// Share of the area's total dead minutes.
    pub percent_of_dead: f64,
}

/// Groups the area's dead-time daily minutes by cause, largest first.
///
/// Causes are grouped by exact text. Equal totals keep first-seen order.
pub fn dead_time_by_cause(area: &Area) -> Vec<CauseShare> {
    let mut order: Vec<Option<&str>> = Vec::new();
    let mut grouped: AHashMap<Option<&str>, (f64, usize)> = AHashMap::new();

    for activity in area
        .activities()
        .filter(|a| a.activity_type == ActivityType::DeadTime)
    {
        let key = activity.cause.as_deref();
        let entry = grouped.entry(key).or_insert_with(|| {
            order.push(key);
            (0.0, 0)
        });
        entry.0 += activity.daily_minutes();
        entry.1 += 1;
    }

    let total_dead: f64 = order.iter().map(|key| grouped[key].0).sum();

    order
        .into_iter()
        .map(|key| {
            let (minutes, activity_count) = grouped[&key];
            CauseShare {
                cause: key.map(str::to_string),
                minutes,
                activity_count,
                percent_of_dead: percent_of(minutes, total_dead),
            }
        })
        .sorted_by(|a, b| b.minutes.total_cmp(&a.minutes))
        .collect()
}
