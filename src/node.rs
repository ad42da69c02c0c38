//! Node classification
//!
//! Converts aggregated vertex occurrence counts into typed, indexed topology nodes.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// Classification of a topology node by its total vertex occurrence count
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Terminal point touched by exactly one vertex occurrence
    Endpoint,
    /// Branching point shared by two or more vertex occurrences
    Junction,
}

impl NodeKind {
    /// Classify from a total vertex occurrence count
    #[inline]
    pub fn classify(connections: usize) -> Self {
        if connections > 1 {
            NodeKind::Junction
        } else {
            NodeKind::Endpoint
        }
    }
}

/// One distinct coordinate location in the derived topology
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable label derived from the index (`NODE_<index>`)
    pub id: String,
    /// Position in first-encounter order, within `0..node_count`
    pub index: usize,
    /// The location, exactly as received
    pub coordinate: Coord<f64>,
    /// Total vertex occurrences sharing this location, across all segments and repeats
    pub connections: usize,
    /// Endpoint or Junction
    pub kind: NodeKind,
}

impl Node {
    /// Create the node for a given first-encounter index
    pub(crate) fn new(index: usize, coordinate: Coord<f64>, connections: usize) -> Self {
        Self {
            id: format!("NODE_{index}"),
            index,
            coordinate,
            connections,
            kind: NodeKind::classify(connections),
        }
    }
}
