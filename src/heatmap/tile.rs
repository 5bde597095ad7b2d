//! Tile shapes: the key type of the heatmap.
//!
//! A tile is an ordered triple of extents (M, N, K). Tiles compare, hash and
//! order structurally, so two tiles built from the same three values are the
//! same key no matter where they came from.

use serde::{Deserialize, Serialize};

/// A 3D tile shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[u64; 3]", into = "[u64; 3]")]
pub struct Tile {
    pub m: u64,
    pub n: u64,
    pub k: u64,
}

impl Tile {
    pub const fn new(m: u64, n: u64, k: u64) -> Self {
        Self { m, n, k }
    }

    /// Build a tile from a slice of ranges.
    ///
    /// # Panics
    ///
    /// Panics if `ranges` does not hold exactly three extents. Passing any
    /// other arity is caller misuse, not a data condition.
    pub fn from_ranges(ranges: &[u64]) -> Self {
        assert_eq!(
            ranges.len(),
            3,
            "heatmap cost expects a 3D tile, got {} ranges",
            ranges.len()
        );
        Self::new(ranges[0], ranges[1], ranges[2])
    }

    /// The tile one step below along N, or None when N is already 0.
    pub fn lower_n(&self) -> Option<Tile> {
        self.n.checked_sub(1).map(|n| Tile { n, ..*self })
    }

    /// The tile one step above along N, or None on overflow.
    pub fn upper_n(&self) -> Option<Tile> {
        self.n.checked_add(1).map(|n| Tile { n, ..*self })
    }

    pub fn to_array(self) -> [u64; 3] {
        [self.m, self.n, self.k]
    }
}

impl From<[u64; 3]> for Tile {
    fn from(v: [u64; 3]) -> Self {
        Tile::new(v[0], v[1], v[2])
    }
}

impl From<Tile> for [u64; 3] {
    fn from(t: Tile) -> Self {
        t.to_array()
    }
}

/// Raw heatmap keys are stored as groups of three `u16`.
impl From<[u16; 3]> for Tile {
    fn from(v: [u16; 3]) -> Self {
        Tile::new(v[0].into(), v[1].into(), v[2].into())
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {} {}]", self.m, self.n, self.k)
    }
}

impl std::str::FromStr for Tile {
    type Err = String;

    /// Parses `M,N,K`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(format!("expected M,N,K but got {s:?}"));
        }
        let mut dims = [0u64; 3];
        for (dim, part) in dims.iter_mut().zip(&parts) {
            *dim = part
                .parse()
                .map_err(|e| format!("invalid extent {part:?} in {s:?}: {e}"))?;
        }
        Ok(Tile::from(dims))
    }
}
