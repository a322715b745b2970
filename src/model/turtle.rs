use serde::{Deserialize, Serialize};

/// The six declared facets of an area's Turtle process diagram.
///
/// Labels are free text compared by exact string equality; no case or
/// whitespace normalization is applied anywhere in the crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TurtleProcess {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub resources: Vec<String>,
    pub methods: Vec<String>,
    pub indicators: Vec<String>,
    pub competencies: Vec<String>,
}

impl TurtleProcess {
    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs = inputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_outputs<I, S>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outputs = outputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Labels of `self.outputs` also declared in `other.inputs`, in output order, without repeats.
    pub fn matching_outputs(&self, other: &TurtleProcess) -> Vec<String> {
        let mut matched: Vec<String> = Vec::new();
        for label in &self.outputs {
            if other.inputs.contains(label) && !matched.contains(label) {
                matched.push(label.clone());
            }
        }
        matched
    }
}
