//! Hand-curated tiles that are known to be usable but have no reliable
//! measurement. The estimator falls back to these after the heatmap.

use crate::heatmap::tile::Tile;

/// Throughput assigned to a special tile.
pub const SPECIAL_THROUGHPUT: f64 = 0.001;

pub const SPECIAL_STENCILS: [Tile; 1] = [Tile::new(64, 16, 3)];

/// Whether `tile` is in the special-case table.
pub fn is_special(tile: &Tile) -> bool {
    SPECIAL_STENCILS.iter().any(|s| s == tile)
}
