//! stencil-heatmap: cost oracle for 3D loop tiling.
//!
//! Given a candidate tile shape (M, N, K), predicts its throughput from a
//! sparse table of measurements so a tiling pass can rank competing shapes.
//! The table is built once and is read-only afterwards.

pub mod config;
pub mod heatmap;

pub use heatmap::estimator::{
    new_shared_estimator, CostEstimator, CostSource, Estimate, StencilCost,
};
pub use heatmap::store::MeasurementStore;
pub use heatmap::tile::Tile;
