//! Area-level evolution between two captures of the same organization.
//!
//! Areas are matched by exact `area_name`, never by `id`: snapshots are
//! independent copies and ids are not guaranteed to line up between them.
//! Areas present on only one side are left out of [`compare_snapshots`];
//! [`compare_snapshots_detailed`] reports them as orphans instead.

use crate::aggregation::compute_area_totals;
use crate::model::{Area, GlobalMeasurement};
use ahash::{AHashMap, AHashSet};
use serde::Serialize;

mod activity;

pub use activity::*;

/// Direction of change of one area between two captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improved,
    Worsened,
    /// Productive and dead time both moved in the same direction.
    Mixed,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub area_name: String,
    pub productive_percent_base: f64,
    pub productive_percent_current: f64,
    pub dead_percent_base: f64,
    pub dead_percent_current: f64,
    pub productive_delta: f64,
    pub dead_delta: f64,
    /// More productive time or less dead time.
    pub improved: bool,
    /// Less productive time or more dead time. May hold together with `improved`.
    pub worsened: bool,
}

impl ComparisonRow {
    fn between(base: &Area, current: &Area) -> Self {
        let base_totals = compute_area_totals(base);
        let current_totals = compute_area_totals(current);
        let productive_delta = current_totals.productive_percent - base_totals.productive_percent;
        let dead_delta = current_totals.dead_percent - base_totals.dead_percent;
        Self {
            area_name: base.area_name.clone(),
            productive_percent_base: base_totals.productive_percent,
            productive_percent_current: current_totals.productive_percent,
            dead_percent_base: base_totals.dead_percent,
            dead_percent_current: current_totals.dead_percent,
            productive_delta,
            dead_delta,
            improved: productive_delta > 0.0 || dead_delta < 0.0,
            worsened: productive_delta < 0.0 || dead_delta > 0.0,
        }
    }

    pub fn trend(&self) -> Trend {
        match (self.improved, self.worsened) {
            (true, false) => Trend::Improved,
            (false, true) => Trend::Worsened,
            (true, true) => Trend::Mixed,
            (false, false) => Trend::Unchanged,
        }
    }
}

/// Comparison rows plus the area names that could not be matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotComparison {
    pub rows: Vec<ComparisonRow>,
    /// Names only present in the base capture.
    pub orphaned_base: Vec<String>,
    /// Names only present in the current capture.
    pub orphaned_current: Vec<String>,
}

/// Index of areas by name; the first area with a given name wins.
pub(crate) fn index_by_name(areas: &[Area]) -> AHashMap<&str, &Area> {
    let mut index = AHashMap::with_capacity(areas.len());
    for area in areas {
        index.entry(area.area_name.as_str()).or_insert(area);
    }
    index
}

/// Pairs of same-named areas, in `base` order.
///
/// Only the first area with a given name takes part, on either side.
pub(crate) fn matched_pairs<'a>(
    base: &'a [Area],
    current: &'a [Area],
) -> Vec<(&'a Area, &'a Area)> {
    let current_by_name = index_by_name(current);
    let mut seen = AHashSet::with_capacity(base.len());
    base.iter()
        .filter(|&area| seen.insert(area.area_name.as_str()))
        .filter_map(|area| {
            let matched = current_by_name.get(area.area_name.as_str()).copied();
            if matched.is_none() {
                log::debug!(
                    "Area '{}' has no counterpart in the current capture; skipped",
                    area.area_name
                );
            }
            matched.map(|current| (area, current))
        })
        .collect()
}

/// Compares two area collections, skipping areas without a same-named counterpart.
pub fn compare_snapshots(base: &[Area], current: &[Area]) -> Vec<ComparisonRow> {
    matched_pairs(base, current)
        .into_iter()
        .map(|(base_area, current_area)| ComparisonRow::between(base_area, current_area))
        .collect()
}

/// Like [`compare_snapshots`], also listing the names that were not matched.
pub fn compare_snapshots_detailed(base: &[Area], current: &[Area]) -> SnapshotComparison {
    let base_by_name = index_by_name(base);
    let current_by_name = index_by_name(current);
    let orphaned_base = orphans(base, &current_by_name);
    let orphaned_current = orphans(current, &base_by_name);
    if !orphaned_base.is_empty() || !orphaned_current.is_empty() {
        log::warn!(
            "Snapshot comparison left {} base and {} current areas unmatched",
            orphaned_base.len(),
            orphaned_current.len()
        );
    }
    SnapshotComparison {
        rows: compare_snapshots(base, current),
        orphaned_base,
        orphaned_current,
    }
}

fn orphans(areas: &[Area], other_side: &AHashMap<&str, &Area>) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for area in areas {
        if !other_side.contains_key(area.area_name.as_str()) && !names.contains(&area.area_name) {
            names.push(area.area_name.clone());
        }
    }
    names
}

/// Compares two global measurements area by area.
pub fn compare_measurements(
    base: &GlobalMeasurement,
    current: &GlobalMeasurement,
) -> Vec<ComparisonRow> {
    compare_snapshots(base.areas(), current.areas())
}
