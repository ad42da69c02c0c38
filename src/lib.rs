//! Pipeline Topology Library - Coordinate-Keyed Network Topology Extraction
//!
//! This library derives the topology of a physical line network (e.g. pipelines) from raw
//! GeoJSON line geometry: the set of distinct vertex locations, how many vertex occurrences
//! touch each location, and whether each location is a terminal endpoint or a junction where
//! multiple segments meet. No pre-existing node/edge annotations are required.
//!
//! # Architecture
//!
//! - **[`PipelineFeature`]**: Immutable storage for one parsed line feature
//! - **[`LineSegment`]**: External index references into feature coordinate data
//! - **[`NodeKey`]**: Canonical exact-match identity for a vertex location
//! - **[`Node`]**: Classified, indexed topology entity ([`NodeKind::Endpoint`] or
//!   [`NodeKind::Junction`])
//! - **[`TopologyModel`]**: The complete derived result of one ingestion cycle
//!
//! # Pipeline
//!
//! A single forward pass: ingest features, normalize every vertex to a [`NodeKey`],
//! aggregate occurrence counts in first-encounter order, classify nodes, derive
//! [`Statistics`]. The model is built fresh on every ingestion and handed out read-only;
//! rendering, tiles, and interaction live outside this crate.

mod feature;
mod ingest;
mod key;
mod node;
mod segment;
mod stats;
mod topology;

// Public API exports
pub use feature::{GeometryKind, PipelineFeature};
pub use key::NodeKey;
pub use node::{Node, NodeKind};
pub use segment::LineSegment;
pub use stats::Statistics;
pub use topology::TopologyModel;

/// Error types for dataset acquisition
///
/// Per-feature problems never surface here: an unsupported or malformed feature is skipped
/// with a warning and ingestion continues. These variants cover whole-dataset failures,
/// which are terminal for the cycle and produce no partial model.
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("GeoJSON parsing error: {0}")]
    GeojsonParse(#[from] geojson::Error),

    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TopologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify that all public types are accessible
        let _: fn(&geojson::FeatureCollection) -> TopologyModel = TopologyModel::build;
        let _: fn(usize) -> NodeKind = NodeKind::classify;
    }
}
