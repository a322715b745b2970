use thiserror::Error;

/// Data-entry violations found while validating areas.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Area '{area_id}' has an empty {field}")]
    EmptyField { area_id: String, field: &'static str },

    #[error("Area '{area_id}' has a non-finite or negative {field}: {value}")]
    InvalidMinutes {
        area_id: String,
        field: &'static str,
        value: f64,
    },

    #[error("Position '{position_id}' in area '{area_id}' must be held by at least one person")]
    ZeroHeadcount { area_id: String, position_id: String },

    #[error(
        "Activity '{activity_id}' in position '{position_id}' has a non-finite or negative duration: {time_minutes}"
    )]
    InvalidActivityDuration {
        position_id: String,
        activity_id: String,
        time_minutes: f64,
    },

    #[error("Area '{area_id}' declares {kind} id '{id}' more than once")]
    DuplicateId {
        area_id: String,
        kind: &'static str,
        id: String,
    },

    #[error("Area '{area_id}' reuses the area name '{area_name}'")]
    DuplicateAreaName { area_id: String, area_name: String },
}

/// Errors raised while reading datasets and configuration files.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Could not read '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse dataset JSON: {0}")]
    Parse(String),

    #[error("Failed to serialize dataset: {0}")]
    Serialize(String),

    #[error("Invalid dataset: {0}")]
    Invalid(#[from] ValidationError),
}

/// Errors raised while writing or reading a binary measurement archive.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArchiveError {
    #[error("Archive I/O failed for '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Serialization failed: {0}")]
    Encode(String),

    #[error("Deserialization failed: {0}")]
    Decode(String),
}
