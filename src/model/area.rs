use super::{Activity, Position, TurtleProcess};
use serde::{Deserialize, Serialize};

/// An organizational area: its working-day parameters, its positions and
/// optionally its Turtle process declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: String,
    pub area_name: String,
    #[serde(default)]
    pub manager_name: String,
    #[serde(default)]
    pub date: String,
    pub workday_minutes: f64,
    #[serde(default)]
    pub fixed_breaks_minutes: f64,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub turtle_process: Option<TurtleProcess>,
    #[serde(default)]
    pub company_id: Option<String>,
}

impl Area {
    pub fn new(id: impl Into<String>, area_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            area_name: area_name.into(),
            manager_name: String::new(),
            date: String::new(),
            workday_minutes: 0.0,
            fixed_breaks_minutes: 0.0,
            positions: Vec::new(),
            turtle_process: None,
            company_id: None,
        }
    }

    pub fn with_workday(mut self, workday_minutes: f64, fixed_breaks_minutes: f64) -> Self {
        self.workday_minutes = workday_minutes;
        self.fixed_breaks_minutes = fixed_breaks_minutes;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.positions.push(position);
        self
    }

    pub fn with_turtle_process(mut self, turtle_process: TurtleProcess) -> Self {
        self.turtle_process = Some(turtle_process);
        self
    }

    /// Available minutes for one person on one day. Not clamped; may be zero or negative.
    pub fn available_minutes_per_person(&self) -> f64 {
        self.workday_minutes - self.fixed_breaks_minutes
    }

    /// All activities of the area, positions first then activities, in stored order.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.positions.iter().flat_map(|p| p.activities.iter())
    }

    /// Sum of position headcounts.
    pub fn headcount(&self) -> u64 {
        self.positions.iter().map(|p| u64::from(p.count)).sum()
    }

    pub fn inputs(&self) -> &[String] {
        self.turtle_process
            .as_ref()
            .map(|tp| tp.inputs.as_slice())
            .unwrap_or_default()
    }

    pub fn outputs(&self) -> &[String] {
        self.turtle_process
            .as_ref()
            .map(|tp| tp.outputs.as_slice())
            .unwrap_or_default()
    }

    pub fn methods(&self) -> &[String] {
        self.turtle_process
            .as_ref()
            .map(|tp| tp.methods.as_slice())
            .unwrap_or_default()
    }
}
