//! Measurement store: the immutable tile → throughput map.
//!
//! The store is built exactly once from two parallel raw arrays (keys and
//! measured throughputs) and is read-only afterwards. There is no way to
//! insert or remove an entry after construction, so a store can be shared
//! across threads behind an `Arc` without locking.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::heatmap::tile::Tile;

/// Measured throughput per tile.
#[derive(Debug, Clone, Default)]
pub struct MeasurementStore {
    by_tile: BTreeMap<Tile, f64>,
}

impl MeasurementStore {
    /// Build the store from parallel key/value arrays.
    ///
    /// Entry `i` pairs `keys[i]` with `values[i]`. A key that appears more
    /// than once keeps the value of its last occurrence.
    ///
    /// # Panics
    ///
    /// Panics if `keys` and `values` differ in length.
    pub fn build(keys: &[[u16; 3]], values: &[f32]) -> Self {
        assert_eq!(
            keys.len(),
            values.len(),
            "heatmap keys and values must have the same length"
        );
        Self::from_entries(
            keys.iter()
                .zip(values)
                .map(|(key, &value)| (Tile::from(*key), f64::from(value))),
        )
    }

    /// Build the store from already-typed entries, last write wins.
    pub fn from_entries(entries: impl IntoIterator<Item = (Tile, f64)>) -> Self {
        let mut by_tile = BTreeMap::new();
        let mut duplicates = 0usize;

        for (tile, throughput) in entries {
            if by_tile.insert(tile, throughput).is_some() {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            warn!(duplicates, "Heatmap contains duplicate tiles, keeping the last value");
        }
        debug!(entries = by_tile.len(), "Heatmap built");

        Self { by_tile }
    }

    /// Measured throughput for `tile`, if any.
    pub fn lookup(&self, tile: &Tile) -> Option<f64> {
        self.by_tile.get(tile).copied()
    }

    /// Number of measured tiles.
    pub fn len(&self) -> usize {
        self.by_tile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tile.is_empty()
    }

    /// All entries in tile order.
    pub fn iter(&self) -> impl Iterator<Item = (&Tile, &f64)> {
        self.by_tile.iter()
    }
}
