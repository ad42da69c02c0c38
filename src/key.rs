//! Canonical coordinate identity for vertex aggregation

use geo::Coord;
use std::fmt;

/// Canonical, exact-match identity for a vertex location
///
/// Two coordinates share a `NodeKey` iff their raw component values are identical; values
/// differing only in trailing precision stay distinct locations. This precision sensitivity
/// is deliberate: no tolerance-based snapping is applied, so merging nearby-but-unequal
/// coordinates never changes node counts behind the caller's back.
///
/// The key stores the raw `f64` bit patterns rather than a formatted string, keeping the
/// derivation lossless with respect to the input representation. The single
/// canonicalization is that `-0.0` collapses to `0.0`: the two compare equal and must share
/// a key.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct NodeKey {
    lng_bits: u64,
    lat_bits: u64,
}

impl NodeKey {
    /// Normalize a raw (longitude, latitude) coordinate into its canonical identity
    ///
    /// Pure and deterministic: equal inputs always produce equal keys.
    #[inline]
    pub fn normalize(coord: Coord<f64>) -> Self {
        Self {
            lng_bits: canonical_bits(coord.x),
            lat_bits: canonical_bits(coord.y),
        }
    }

    /// Recover the coordinate this key was derived from
    #[inline]
    pub fn coordinate(&self) -> Coord<f64> {
        Coord {
            x: f64::from_bits(self.lng_bits),
            y: f64::from_bits(self.lat_bits),
        }
    }
}

impl From<Coord<f64>> for NodeKey {
    #[inline]
    fn from(coord: Coord<f64>) -> Self {
        Self::normalize(coord)
    }
}

/// Formats as `"<lng>,<lat>"` using the shortest round-trip decimal form of each component
impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coord = self.coordinate();
        write!(f, "{},{}", coord.x, coord.y)
    }
}

/// Bit pattern with negative zero collapsed to positive zero
#[inline]
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}
