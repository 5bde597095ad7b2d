//! Runtime configuration for stencil-heatmap.
//!
//! Configuration can be loaded from a JSON file or constructed programmatically.
//! Every field has a default, so an empty or missing file is valid.

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::heatmap::special::SPECIAL_THROUGHPUT;
use crate::heatmap::tile::Tile;

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "stencil-heatmap", about = "Heatmap cost oracle for 3D tile shapes")]
pub struct Cli {
    /// Path to configuration file (JSON).
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Heatmap file (JSON with `keys` and `values`), overrides the config.
    #[arg(long)]
    pub heatmap: Option<PathBuf>,

    /// Enable verbose logging (traces every estimator decision).
    #[arg(short, long)]
    pub verbose: bool,

    /// Tiles to estimate, written M,N,K.
    #[arg(required = true, value_name = "M,N,K")]
    pub tiles: Vec<Tile>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the measurements come from.
    pub heatmap: HeatmapConfig,

    /// Estimator constants.
    pub estimator: EstimatorConfig,
}

/// Heatmap source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    /// Path to the heatmap JSON file.
    pub path: PathBuf,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("heatmap.json"),
        }
    }
}

/// Constants attached to estimates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Fixed startup overhead attached to every known estimate.
    pub startup_cost: u32,

    /// Throughput reported for tiles in the special-case table.
    pub special_throughput: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            startup_cost: 32,
            special_throughput: SPECIAL_THROUGHPUT,
        }
    }
}

impl EstimatorConfig {
    /// Reject values that would make a known estimate read as unknown.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.startup_cost > 0,
            "estimator.startup_cost must be positive, 0 marks an unknown cost"
        );
        anyhow::ensure!(
            self.special_throughput.is_finite() && self.special_throughput > 0.0,
            "estimator.special_throughput must be positive and finite, got {}",
            self.special_throughput
        );
        Ok(())
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults for missing fields.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if path.exists() {
            let data = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&data)?;
            config.estimator.validate()?;
            Ok(config)
        } else {
            tracing::warn!("Config file not found at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }
}
