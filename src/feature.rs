//! Pipeline feature storage and GeoJSON conversion
//!
//! This module provides the `PipelineFeature` struct for storing one parsed line feature
//! with its raw coordinate data and free-form properties.

use geo::{Coord, LineString};
use geojson::JsonObject;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Supported line geometry kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    /// One ordered coordinate sequence
    LineString,
    /// An ordered sequence of coordinate sequences
    MultiLineString,
}

/// One parsed line feature with raw coordinate data and free-form properties
///
/// Coordinates are stored exactly as received: WGS84 longitude/latitude at full precision,
/// no reprojection. A `LineString` feature holds one line; a `MultiLineString` feature
/// holds one line per sub-line. [`LineSegment`](crate::LineSegment)s reference into this
/// storage rather than copying it.
#[derive(Clone, Debug)]
pub struct PipelineFeature {
    kind: GeometryKind,
    lines: Vec<LineString<f64>>,
    properties: JsonObject,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl PipelineFeature {
    /// Parse a single GeoJSON feature
    ///
    /// Returns `None` for anything the pipeline does not ingest: a missing geometry, a
    /// geometry kind other than `LineString`/`MultiLineString`, or a position with fewer
    /// than two components. Skips are logged and never abort the surrounding ingestion.
    /// Elevation and any further position components are ignored.
    pub fn from_geojson(feature: &geojson::Feature) -> Option<Arc<Self>> {
        let Some(geometry) = &feature.geometry else {
            tracing::warn!("Skipping feature without geometry");
            return None;
        };

        let (kind, lines) = match &geometry.value {
            geojson::Value::LineString(line) => {
                (GeometryKind::LineString, vec![convert_line(line)?])
            }
            geojson::Value::MultiLineString(lines) => (
                GeometryKind::MultiLineString,
                lines
                    .iter()
                    .map(|line| convert_line(line))
                    .collect::<Option<Vec<_>>>()?,
            ),
            other => {
                tracing::warn!("Skipping unsupported geometry kind: {}", other.type_name());
                return None;
            }
        };

        Some(Arc::new(Self {
            kind,
            lines,
            properties: feature.properties.clone().unwrap_or_default(),
        }))
    }

    /// The geometry kind this feature was parsed from
    #[inline]
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    /// All coordinate lines of this feature
    ///
    /// Exactly one entry for a `LineString`, one per sub-line for a `MultiLineString`.
    #[inline]
    pub fn lines(&self) -> &[LineString<f64>] {
        &self.lines
    }

    /// Free-form properties carried over from the source feature
    #[inline]
    pub fn properties(&self) -> &JsonObject {
        &self.properties
    }

    /// Look up a single property value by name
    #[inline]
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.get(key)
    }

    /// Total number of vertices across all lines
    pub fn vertex_count(&self) -> usize {
        self.lines.iter().map(|line| line.0.len()).sum()
    }
}

/// Convert one GeoJSON coordinate sequence, rejecting malformed positions
fn convert_line(line: &[Vec<f64>]) -> Option<LineString<f64>> {
    line.iter()
        .map(|position| match position.as_slice() {
            [lng, lat, ..] => Some(Coord { x: *lng, y: *lat }),
            _ => {
                tracing::warn!(
                    "Skipping feature with malformed position ({} components)",
                    position.len()
                );
                None
            }
        })
        .collect()
}
