//! Heatmap-driven tile cost estimation.
//!
//! - [`tile`]: the 3D `Tile` key type
//! - [`store`]: immutable measured throughput per tile
//! - [`special`]: curated tiles with an assumed throughput
//! - [`estimator`]: exact / neighbor / special / unknown cost lookup
//! - [`data`]: raw parallel arrays and JSON loading

pub mod data;
pub mod estimator;
pub mod special;
pub mod store;
pub mod tile;
