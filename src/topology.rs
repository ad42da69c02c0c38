//! TopologyModel - Top-level two-phase topology derivation and model access
//!
//! This module provides the high-level API for turning a GeoJSON feature collection into
//! a navigable topology model: ingest features, aggregate every vertex occurrence under
//! its canonical key, classify nodes, and derive statistics.

use crate::ingest::Ingest;
use crate::{LineSegment, Node, NodeKey, PipelineFeature, Result, Statistics};
use geojson::{FeatureCollection, GeoJson};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

/// The complete derived result of one ingestion cycle
///
/// Built fresh on every ingestion as an immutable snapshot: the rendering layer receives
/// read-only access and a re-ingestion fully replaces the model rather than mutating it.
/// Node order is the first-encounter order of the aggregation pass, kept in an explicit
/// append-only list - it never depends on map iteration order.
#[derive(Clone, Debug)]
pub struct TopologyModel {
    /// Features that ingested successfully, in input order
    features: Vec<Arc<PipelineFeature>>,
    /// Flat renderable segment sequence
    segments: Vec<LineSegment>,
    /// Classified nodes in first-encounter order
    nodes: Vec<Node>,
    /// Total vertex occurrences per canonical location
    connections: HashMap<NodeKey, usize>,
    /// Summary figures
    stats: Statistics,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl TopologyModel {
    /// Build a topology model from an in-memory feature collection
    ///
    /// This is a pure function of its input: per-feature problems are recovered inside
    /// the ingestor and can never fail the build. The counting pass runs to completion
    /// over every feature before any node is classified, because a node's final
    /// connection count depends on every feature that touches it.
    pub fn build(collection: &FeatureCollection) -> Self {
        #[cfg(feature = "profiling")]
        profiling::scope!("topology::build");

        let ingest = Ingest::scan(collection);

        // Phase 1: count every vertex occurrence, recording each key once at first
        // sight. Interior polyline vertices count too, so a coincident point shared
        // between segments (or repeated within one) ends up classified as a junction.
        let mut connections: HashMap<NodeKey, usize> = HashMap::new();
        let mut order: Vec<NodeKey> = Vec::new();
        for coord in ingest.vertices() {
            match connections.entry(NodeKey::normalize(coord)) {
                Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                Entry::Vacant(entry) => {
                    order.push(*entry.key());
                    entry.insert(1);
                }
            }
        }

        // Phase 2: assign identity and classification from the completed counts
        let nodes: Vec<Node> = order
            .iter()
            .enumerate()
            .map(|(index, key)| Node::new(index, key.coordinate(), connections[key]))
            .collect();

        let stats = Statistics::summarize(&ingest, nodes.len());

        Self {
            features: ingest.features,
            segments: ingest.segments,
            nodes,
            connections,
            stats,
        }
    }

    /// Parse a GeoJSON document and build the model
    ///
    /// The whole document must parse as a feature collection. Acquisition failures are
    /// terminal for the cycle: no partial model is produced.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let geojson: GeoJson = json.parse()?;
        Ok(Self::build(&FeatureCollection::try_from(geojson)?))
    }

    /// Deserialize a GeoJSON document from a reader and build the model
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let geojson: GeoJson = serde_json::from_reader(reader)?;
        Ok(Self::build(&FeatureCollection::try_from(geojson)?))
    }

    /// Load a GeoJSON file and build the model
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Classified nodes in first-encounter order
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Flat renderable segment sequence
    #[inline]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Features that ingested successfully
    #[inline]
    pub fn features(&self) -> &[Arc<PipelineFeature>] {
        &self.features
    }

    /// Summary statistics for this cycle
    #[inline]
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Number of distinct vertex locations
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Look up a node by its stable index
    ///
    /// Selection callbacks in the rendering layer hold a node's index and query the
    /// model through this; the core stays unaware of any display mechanism.
    #[inline]
    pub fn get_node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Total vertex occurrences at a canonical location
    #[inline]
    pub fn connections(&self, key: &NodeKey) -> Option<usize> {
        self.connections.get(key).copied()
    }

    /// Check if the model contains any nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
