//! Time and percentage aggregation at position, area and organization level.
//!
//! Area totals describe one representative working day of a single person:
//! activity minutes are summed once and compared against
//! `workday - breaks`. Position totals measure the role's activity minutes
//! against the capacity of every holder: the available minutes are
//! multiplied by the position's headcount, the activity minutes are not.
//! The two bases are deliberately different and must not be reconciled.

use crate::model::{Activity, ActivityType, Area, Position};
use serde::Serialize;

mod causes;
mod organization;

pub use causes::*;
pub use organization::*;

/// Minute totals and their share of the available time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTotals {
    pub total_assigned_minutes: f64,
    pub productive_minutes: f64,
    pub support_minutes: f64,
    pub dead_minutes: f64,
    pub available_minutes: f64,
    /// `available - assigned`. Negative values signal over-allocation.
    pub unassigned_minutes: f64,
    pub productive_percent: f64,
    pub support_percent: f64,
    pub dead_percent: f64,
    pub unassigned_percent: f64,
}

impl TimeTotals {
    /// Builds totals from already-summed minutes.
    fn from_minutes(
        productive_minutes: f64,
        support_minutes: f64,
        dead_minutes: f64,
        available_minutes: f64,
    ) -> Self {
        let total_assigned_minutes = productive_minutes + support_minutes + dead_minutes;
        let unassigned_minutes = available_minutes - total_assigned_minutes;
        Self {
            total_assigned_minutes,
            productive_minutes,
            support_minutes,
            dead_minutes,
            available_minutes,
            unassigned_minutes,
            productive_percent: percent_of(productive_minutes, available_minutes),
            support_percent: percent_of(support_minutes, available_minutes),
            dead_percent: percent_of(dead_minutes, available_minutes),
            unassigned_percent: percent_of(unassigned_minutes, available_minutes),
        }
    }

    /// Minutes of the given classification.
    pub fn minutes_of(&self, activity_type: ActivityType) -> f64 {
        match activity_type {
            ActivityType::Productive => self.productive_minutes,
            ActivityType::Support => self.support_minutes,
            ActivityType::DeadTime => self.dead_minutes,
        }
    }

    /// Percentage of the given classification.
    pub fn percent_of(&self, activity_type: ActivityType) -> f64 {
        match activity_type {
            ActivityType::Productive => self.productive_percent,
            ActivityType::Support => self.support_percent,
            ActivityType::DeadTime => self.dead_percent,
        }
    }

    pub fn is_over_allocated(&self) -> bool {
        self.unassigned_minutes < 0.0
    }
}

/// `minutes / available * 100`, or `0` when nothing is available.
pub fn percent_of(minutes: f64, available_minutes: f64) -> f64 {
    if available_minutes > 0.0 {
        minutes / available_minutes * 100.0
    } else {
        0.0
    }
}

/// Per-type daily minutes, accumulated in iteration order.
#[derive(Default)]
struct TypeSums {
    productive: f64,
    support: f64,
    dead: f64,
}

impl TypeSums {
    fn add(&mut self, activity: &Activity) {
        let minutes = activity.daily_minutes();
        match activity.activity_type {
            ActivityType::Productive => self.productive += minutes,
            ActivityType::Support => self.support += minutes,
            ActivityType::DeadTime => self.dead += minutes,
        }
    }
}

/// Totals for one area on a single-person basis.
pub fn compute_area_totals(area: &Area) -> TimeTotals {
    let mut sums = TypeSums::default();
    for activity in area.activities() {
        sums.add(activity);
    }
    TimeTotals::from_minutes(
        sums.productive,
        sums.support,
        sums.dead,
        area.available_minutes_per_person(),
    )
}

/// Totals for one position against the available time of all its holders.
///
/// `available_minutes` is `(workday - breaks) * count`; percentages and
/// unassigned time are measured against that headcount-scaled capacity.
pub fn compute_position_totals(
    position: &Position,
    workday_minutes: f64,
    fixed_breaks_minutes: f64,
) -> TimeTotals {
    let mut sums = TypeSums::default();
    for activity in &position.activities {
        sums.add(activity);
    }
    TimeTotals::from_minutes(
        sums.productive,
        sums.support,
        sums.dead,
        (workday_minutes - fixed_breaks_minutes) * f64::from(position.count),
    )
}

/// Totals of one position, labelled for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionTotals {
    pub position_id: String,
    pub position_name: String,
    pub count: u32,
    pub totals: TimeTotals,
}

/// Position totals for every position of `area`, in stored order.
pub fn compute_position_breakdown(area: &Area) -> Vec<PositionTotals> {
    area.positions
        .iter()
        .map(|position| PositionTotals {
            position_id: position.id.clone(),
            position_name: position.name.clone(),
            count: position.count,
            totals: compute_position_totals(
                position,
                area.workday_minutes,
                area.fixed_breaks_minutes,
            ),
        })
        .collect()
}
