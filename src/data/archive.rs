use crate::error::ArchiveError;
use crate::model::GlobalMeasurement;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// Binary container of captured measurements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementArchive {
    pub measurements: Vec<GlobalMeasurement>,
}

impl MeasurementArchive {
    pub fn new(measurements: Vec<GlobalMeasurement>) -> Self {
        Self { measurements }
    }

    pub fn push(&mut self, measurement: GlobalMeasurement) {
        self.measurements.push(measurement);
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArchiveError> {
        encode_to_vec(self, standard()).map_err(|e| ArchiveError::Encode(e.to_string()))
    }

    /// Saves the archive to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArchiveError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| ArchiveError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| ArchiveError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        log::debug!(
            "Wrote {} measurements ({} bytes) to '{}'",
            self.measurements.len(),
            bytes.len(),
            path
        );
        Ok(())
    }

    /// Loads an archive from a file.
    pub fn from_file(path: &str) -> Result<Self, ArchiveError> {
        let mut file = fs::File::open(path).map_err(|e| ArchiveError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| ArchiveError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArchiveError> {
        decode_from_slice(bytes, standard())
            .map(|(archive, _)| archive)
            .map_err(|e| ArchiveError::Decode(e.to_string()))
    }
}
