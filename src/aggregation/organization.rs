use super::{TimeTotals, compute_area_totals};
use crate::config::MetricsConfig;
use crate::model::Area;
use itertools::Itertools;
use serde::Serialize;

/// An area together with its single-person totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaScore {
    pub area_id: String,
    pub area_name: String,
    pub totals: TimeTotals,
}

/// Organization-wide summary over a list of areas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMetrics {
    pub area_count: usize,
    /// Unweighted means: every area counts once.
    pub average_productive_percent: f64,
    pub average_support_percent: f64,
    pub average_dead_percent: f64,
    pub efficient_area_count: usize,
    pub critical_area_count: usize,
    pub best_area: Option<AreaScore>,
    pub worst_area: Option<AreaScore>,
    /// Descending by productive percent; equal values keep input order.
    pub ranking: Vec<AreaScore>,
}

/// Organization metrics with the default thresholds.
pub fn compute_organization_metrics(areas: &[Area]) -> OrganizationMetrics {
    compute_organization_metrics_with(areas, &MetricsConfig::default())
}

pub fn compute_organization_metrics_with(
    areas: &[Area],
    config: &MetricsConfig,
) -> OrganizationMetrics {
    let scores: Vec<AreaScore> = areas
        .iter()
        .map(|area| AreaScore {
            area_id: area.id.clone(),
            area_name: area.area_name.clone(),
            totals: compute_area_totals(area),
        })
        .collect();

    let mean = |select: fn(&TimeTotals) -> f64| {
        if scores.is_empty() {
            0.0
        } else {
            scores.iter().map(|s| select(&s.totals)).sum::<f64>() / scores.len() as f64
        }
    };

    let average_productive_percent = mean(|t| t.productive_percent);
    let average_support_percent = mean(|t| t.support_percent);
    let average_dead_percent = mean(|t| t.dead_percent);

    let efficient_area_count = scores
        .iter()
        .filter(|s| s.totals.productive_percent >= config.efficient_productive_percent)
        .count();
    let critical_area_count = scores
        .iter()
        .filter(|s| s.totals.dead_percent >= config.critical_dead_percent)
        .count();

    let best_area = first_max_by(&scores, |t| t.productive_percent).cloned();
    let worst_area = first_max_by(&scores, |t| t.dead_percent).cloned();

    let ranking: Vec<AreaScore> = scores
        .into_iter()
        .sorted_by(|a, b| {
            b.totals
                .productive_percent
                .total_cmp(&a.totals.productive_percent)
        })
        .collect();

    log::debug!(
        "Organization metrics over {} areas: {} efficient, {} critical",
        ranking.len(),
        efficient_area_count,
        critical_area_count
    );

    OrganizationMetrics {
        area_count: ranking.len(),
        average_productive_percent,
        average_support_percent,
        average_dead_percent,
        efficient_area_count,
        critical_area_count,
        best_area,
        worst_area,
        ranking,
    }
}

/// The first score holding the maximum value; later equal values never replace it.
fn first_max_by(scores: &[AreaScore], select: fn(&TimeTotals) -> f64) -> Option<&AreaScore> {
    scores.iter().fold(None, |best: Option<&AreaScore>, score| match best {
        Some(current) if select(&score.totals) <= select(&current.totals) => Some(current),
        _ => Some(score),
    })
}
