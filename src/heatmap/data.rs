//! Raw heatmap data as produced by the measurement tooling.
//!
//! The file format is JSON with two parallel arrays:
//!
//! ```json
//! { "keys": [[64, 8, 3], [64, 16, 4]], "values": [12.5, 3.25] }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::heatmap::store::MeasurementStore;

#[derive(Error, Debug)]
pub enum HeatmapError {
    #[error("Failed to read heatmap {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid heatmap JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Heatmap has {keys} keys but {values} values")]
    LengthMismatch { keys: usize, values: usize },
}

/// Parallel key/value arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatmapData {
    pub keys: Vec<[u16; 3]>,
    pub values: Vec<f32>,
}

impl HeatmapData {
    /// Parse and validate heatmap JSON.
    pub fn from_json(json: &str) -> Result<Self, HeatmapError> {
        let data: HeatmapData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Read and validate a heatmap file.
    pub fn load(path: &Path) -> Result<Self, HeatmapError> {
        let json = std::fs::read_to_string(path).map_err(|source| HeatmapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json(&json)?;
        debug!(path = %path.display(), entries = data.len(), "Heatmap loaded");
        Ok(data)
    }

    /// Check the arrays line up.
    pub fn validate(&self) -> Result<(), HeatmapError> {
        if self.keys.len() != self.values.len() {
            return Err(HeatmapError::LengthMismatch {
                keys: self.keys.len(),
                values: self.values.len(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Validate, then build the measurement store.
    pub fn into_store(self) -> Result<MeasurementStore, HeatmapError> {
        self.validate()?;
        Ok(MeasurementStore::build(&self.keys, &self.values))
    }
}
