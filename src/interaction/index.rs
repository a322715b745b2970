use super::{Interaction, same_participant, with_process};
use crate::model::{Area, TurtleProcess};
use ahash::AHashMap;
use std::collections::BTreeMap;

/// Inputs of every area indexed by label, for interaction lookup in O(n·m).
///
/// Produces exactly the same interactions, in the same order, as
/// [`super::detect_interactions`].
pub struct InteractionIndex<'a> {
    participants: Vec<(usize, &'a Area, &'a TurtleProcess)>,
    consumers: AHashMap<&'a str, Vec<usize>>,
}

impl<'a> InteractionIndex<'a> {
    pub fn new(areas: &'a [Area]) -> Self {
        let participants = with_process(areas);
        let mut consumers: AHashMap<&'a str, Vec<usize>> = AHashMap::new();
        for (slot, &(_, _, tp)) in participants.iter().enumerate() {
            for label in &tp.inputs {
                let slots = consumers.entry(label.as_str()).or_default();
                if slots.last() != Some(&slot) {
                    slots.push(slot);
                }
            }
        }
        Self {
            participants,
            consumers,
        }
    }

    /// Areas whose declared inputs contain `label`, in input order.
    pub fn consumers_of(&self, label: &str) -> impl Iterator<Item = &'a Area> + '_ {
        self.consumers
            .get(label)
            .into_iter()
            .flatten()
            .map(|&slot| self.participants[slot].1)
    }

    pub fn interactions(&self) -> Vec<Interaction> {
        let mut interactions = Vec::new();
        for (_, source, source_tp) in &self.participants {
            let mut matched: BTreeMap<usize, Vec<String>> = BTreeMap::new();
            for label in &source_tp.outputs {
                let Some(slots) = self.consumers.get(label.as_str()) else {
                    continue;
                };
                for &slot in slots {
                    let target = self.participants[slot].1;
                    if same_participant(source, target) {
                        continue;
                    }
                    let items = matched.entry(slot).or_default();
                    if !items.contains(label) {
                        items.push(label.clone());
                    }
                }
            }
            interactions.extend(matched.into_iter().map(|(slot, items)| Interaction {
                source: source.area_name.clone(),
                target: self.participants[slot].1.area_name.clone(),
                items,
            }));
        }
        interactions
    }
}
