//! Cost estimator: turns a tile shape into a predicted throughput.
//!
//! Branches, first match wins:
//!
//! ```text
//! 1. (m, n, k) measured                      → measured throughput
//! 2. (m, n + 1, k) measured and either
//!      n == 1                                → upper throughput
//!      (m, n - 1, k) measured                → mean(lower, upper)
//! 3. (m, n, k) in the special-case table     → special throughput
//! 4. otherwise                               → StencilCost::UNKNOWN
//! ```
//!
//! Every known estimate carries the configured startup cost. The unknown
//! estimate carries a startup cost of 0 and must be read as "no information",
//! never as "free".

use std::sync::Arc;

use serde::Serialize;
use tracing::trace;

use crate::config::EstimatorConfig;
use crate::heatmap::special::is_special;
use crate::heatmap::store::MeasurementStore;
use crate::heatmap::tile::Tile;

/// Predicted cost of running one tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StencilCost {
    /// Higher is faster.
    pub throughput: f64,
    pub startup_cost: u32,
}

impl StencilCost {
    /// The "no information" sentinel.
    pub const UNKNOWN: StencilCost = StencilCost {
        throughput: 0.0,
        startup_cost: 0,
    };

    pub fn is_unknown(&self) -> bool {
        self.startup_cost == 0
    }
}

/// Which branch of the estimator produced a cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostSource {
    Measured,
    Interpolated,
    Special,
    Unknown,
}

impl std::fmt::Display for CostSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostSource::Measured => write!(f, "measured"),
            CostSource::Interpolated => write!(f, "interpolated"),
            CostSource::Special => write!(f, "special"),
            CostSource::Unknown => write!(f, "unknown"),
        }
    }
}

/// A cost together with the branch that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub cost: StencilCost,
    pub source: CostSource,
}

/// The heatmap cost oracle.
pub struct CostEstimator {
    store: MeasurementStore,
    config: EstimatorConfig,
}

/// Estimator shared by reference across threads.
pub type SharedEstimator = Arc<CostEstimator>;

/// Build an estimator once and hand out shared read-only handles to it.
pub fn new_shared_estimator(store: MeasurementStore, config: EstimatorConfig) -> SharedEstimator {
    Arc::new(CostEstimator::new(store, config))
}

impl CostEstimator {
    pub fn new(store: MeasurementStore, config: EstimatorConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &MeasurementStore {
        &self.store
    }

    /// Estimate the cost of a tile given as three ranges.
    ///
    /// # Panics
    ///
    /// Panics if `ranges` does not have exactly three elements.
    pub fn estimate(&self, ranges: &[u64]) -> StencilCost {
        self.estimate_tile(Tile::from_ranges(ranges))
    }

    pub fn estimate_tile(&self, tile: Tile) -> StencilCost {
        self.explain(tile).cost
    }

    /// Estimate the cost of `tile` and report which branch fired.
    pub fn explain(&self, tile: Tile) -> Estimate {
        trace!(%tile, "Calculating heatmap cost");

        if let Some(throughput) = self.store.lookup(&tile) {
            trace!(%tile, throughput, "Found tile in the heatmap");
            return self.known(throughput, CostSource::Measured);
        }

        if let Some(throughput) = self.interpolate(&tile) {
            trace!(%tile, throughput, "Averaged nearby tiles along N");
            return self.known(throughput, CostSource::Interpolated);
        }

        if is_special(&tile) {
            trace!(%tile, throughput = self.config.special_throughput, "Found a special tile");
            return self.known(self.config.special_throughput, CostSource::Special);
        }

        trace!(%tile, "Unable to calculate heatmap cost");
        Estimate {
            cost: StencilCost::UNKNOWN,
            source: CostSource::Unknown,
        }
    }

    /// Predict from the neighbors (m, n - 1, k) and (m, n + 1, k).
    ///
    /// When n == 1 the lower neighbor is not required and the upper value is
    /// used alone. For n > 1 both neighbors must be measured.
    fn interpolate(&self, tile: &Tile) -> Option<f64> {
        let lower = if tile.n == 1 {
            None
        } else {
            Some(self.store.lookup(&tile.lower_n()?)?)
        };
        let upper = self.store.lookup(&tile.upper_n()?)?;

        Some(match lower {
            Some(lower) => (lower + upper) / 2.0,
            None => upper,
        })
    }

    fn known(&self, throughput: f64, source: CostSource) -> Estimate {
        Estimate {
            cost: StencilCost {
                throughput,
                startup_cost: self.config.startup_cost,
            },
            source,
        }
    }
}
