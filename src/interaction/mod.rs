//! Directed "supplies-to" edges between areas, inferred from Turtle processes.

use crate::model::{Area, TurtleProcess};
use itertools::iproduct;
use serde::{Deserialize, Serialize};

mod index;

pub use index::InteractionIndex;

/// `source` produces at least one output that `target` declares as an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub source: String,
    pub target: String,
    pub items: Vec<String>,
}

/// Areas that declare a Turtle process, paired with it, in input order.
pub(crate) fn with_process(areas: &[Area]) -> Vec<(usize, &Area, &TurtleProcess)> {
    areas
        .iter()
        .enumerate()
        .filter_map(|(i, area)| area.turtle_process.as_ref().map(|tp| (i, area, tp)))
        .collect()
}

/// Two areas are the same participant when they share an `id` or an area name.
///
/// Interactions are reported by name, so a name collision would otherwise
/// surface as an area supplying itself.
pub(crate) fn same_participant(a: &Area, b: &Area) -> bool {
    a.id == b.id || a.area_name == b.area_name
}

/// Finds every interaction between distinct areas.
///
/// Pairs are visited sources first, then targets, both in input order. Items
/// follow the order of the source's outputs. Areas sharing an `id` or a name
/// never interact with each other.
pub fn detect_interactions(areas: &[Area]) -> Vec<Interaction> {
    let participants = with_process(areas);

    let interactions: Vec<Interaction> = iproduct!(participants.iter(), participants.iter())
        .filter(|((_, source, _), (_, target, _))| !same_participant(source, target))
        .filter_map(|((_, source, source_tp), (_, target, target_tp))| {
            let items = source_tp.matching_outputs(target_tp);
            (!items.is_empty()).then(|| Interaction {
                source: source.area_name.clone(),
                target: target.area_name.clone(),
                items,
            })
        })
        .collect();

    log::debug!(
        "Detected {} interactions across {} areas",
        interactions.len(),
        areas.len()
    );
    interactions
}
