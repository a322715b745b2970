//! Suppliers-Inputs-Process-Outputs-Customers rows derived from area interactions.

use crate::interaction::{same_participant, with_process};
use crate::model::{Area, TurtleProcess};
use serde::Serialize;

/// One consolidated SIPOC row for an area with a Turtle process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SipocRow {
    pub area_id: String,
    pub area_name: String,
    /// Areas whose outputs feed this area's inputs.
    pub suppliers: Vec<String>,
    pub inputs: Vec<String>,
    /// The area's declared methods, shown as its process column.
    pub methods: Vec<String>,
    pub outputs: Vec<String>,
    /// Areas whose inputs consume this area's outputs.
    pub customers: Vec<String>,
}

fn supplies(source: &TurtleProcess, target: &TurtleProcess) -> bool {
    source
        .outputs
        .iter()
        .any(|label| target.inputs.contains(label))
}

/// Builds the SIPOC matrix in input order. Areas without a Turtle process get no row.
pub fn build_sipoc_matrix(areas: &[Area]) -> Vec<SipocRow> {
    let participants = with_process(areas);
    participants
        .iter()
        .map(|&(_, area, tp)| {
            let others = participants
                .iter()
                .filter(|(_, other, _)| !same_participant(other, area));
            let suppliers = others
                .clone()
                .filter(|(_, _, other_tp)| supplies(other_tp, tp))
                .map(|(_, other, _)| other.area_name.clone())
                .collect();
            let customers = others
                .filter(|(_, _, other_tp)| supplies(tp, other_tp))
                .map(|(_, other, _)| other.area_name.clone())
                .collect();
            SipocRow {
                area_id: area.id.clone(),
                area_name: area.area_name.clone(),
                suppliers,
                inputs: tp.inputs.clone(),
                methods: tp.methods.clone(),
                outputs: tp.outputs.clone(),
                customers,
            }
        })
        .collect()
}

/// The SIPOC row of a single `area`, resolving suppliers and customers against `areas`.
///
/// Returns `None` when the area declares no Turtle process.
pub fn sipoc_row(area: &Area, areas: &[Area]) -> Option<SipocRow> {
    let tp = area.turtle_process.as_ref()?;
    let others = with_process(areas)
        .into_iter()
        .filter(|(_, other, _)| !same_participant(other, area));
    let mut suppliers = Vec::new();
    let mut customers = Vec::new();
    for (_, other, other_tp) in others {
        if supplies(other_tp, tp) {
            suppliers.push(other.area_name.clone());
        }
        if supplies(tp, other_tp) {
            customers.push(other.area_name.clone());
        }
    }
    Some(SipocRow {
        area_id: area.id.clone(),
        area_name: area.area_name.clone(),
        suppliers,
        inputs: tp.inputs.clone(),
        methods: tp.methods.clone(),
        outputs: tp.outputs.clone(),
        customers,
    })
}
