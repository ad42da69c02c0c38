//! Geometry ingestion: feature collection to flat segment sequence

use crate::feature::GeometryKind;
use crate::{LineSegment, PipelineFeature};
use geo::Coord;
use geojson::FeatureCollection;
use std::sync::Arc;

/// Result of scanning a feature collection
///
/// The segment sequence is materialized up front so it can be traversed any number of
/// times; each segment references its feature's storage rather than owning coordinates.
/// Unsupported or malformed features are absent here entirely: they contribute to no
/// count and no segment.
pub(crate) struct Ingest {
    /// Features that parsed successfully, in input order
    pub features: Vec<Arc<PipelineFeature>>,
    /// One entry per `LineString`, one per `MultiLineString` sub-line
    pub segments: Vec<LineSegment>,
    /// Features with `LineString` geometry
    pub line_strings: usize,
    /// Features with `MultiLineString` geometry
    pub multi_line_strings: usize,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Ingest {
    /// Scan a feature collection, skipping features the pipeline does not ingest
    ///
    /// A `MultiLineString` feature expands to one segment per sub-line but still counts
    /// once toward the per-kind feature totals.
    pub fn scan(collection: &FeatureCollection) -> Self {
        let mut ingest = Self {
            features: Vec::new(),
            segments: Vec::new(),
            line_strings: 0,
            multi_line_strings: 0,
        };

        for raw in &collection.features {
            let Some(feature) = PipelineFeature::from_geojson(raw) else {
                continue;
            };

            match feature.kind() {
                GeometryKind::LineString => ingest.line_strings += 1,
                GeometryKind::MultiLineString => ingest.multi_line_strings += 1,
            }

            for line_index in 0..feature.lines().len() {
                ingest.segments.push(LineSegment::new(feature.clone(), line_index));
            }
            ingest.features.push(feature);
        }

        ingest
    }

    /// Every vertex coordinate of every segment, in traversal order
    ///
    /// Includes interior polyline points and repeats, not just segment termini.
    pub fn vertices(&self) -> impl Iterator<Item = Coord<f64>> + '_ {
        self.segments
            .iter()
            .flat_map(|segment| segment.coordinates().iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Feature, Geometry, Value};

    fn line_feature(coords: &[[f64; 2]]) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(
                coords.iter().map(|c| c.to_vec()).collect(),
            ))),
            id: None,
            properties: None,
            foreign_members: None,
        }
    }

    fn collection(features: Vec<Feature>) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    #[test]
    fn test_scan_counts_by_kind() {
        let multi = Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::MultiLineString(vec![
                vec![vec![0.0, 0.0], vec![1.0, 1.0]],
                vec![vec![2.0, 2.0], vec![3.0, 3.0]],
            ]))),
            id: None,
            properties: None,
            foreign_members: None,
        };
        let ingest = Ingest::scan(&collection(vec![
            line_feature(&[[0.0, 0.0], [1.0, 1.0]]),
            multi,
        ]));

        assert_eq!(ingest.line_strings, 1);
        assert_eq!(ingest.multi_line_strings, 1);
        assert_eq!(ingest.features.len(), 2);
        // One segment for the LineString, two for the MultiLineString sub-lines
        assert_eq!(ingest.segments.len(), 3);
    }

    #[test]
    fn test_skipped_features_contribute_nothing() {
        let point = Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![0.0, 0.0]))),
            id: None,
            properties: None,
            foreign_members: None,
        };
        let ingest = Ingest::scan(&collection(vec![
            point,
            line_feature(&[[0.0, 0.0], [1.0, 1.0]]),
        ]));

        assert_eq!(ingest.features.len(), 1);
        assert_eq!(ingest.segments.len(), 1);
        assert_eq!(ingest.line_strings, 1);
        assert_eq!(ingest.multi_line_strings, 0);
    }

    #[test]
    fn test_vertices_traversal_order() {
        let ingest = Ingest::scan(&collection(vec![
            line_feature(&[[0.0, 0.0], [1.0, 1.0]]),
            line_feature(&[[2.0, 2.0], [3.0, 3.0]]),
        ]));

        let xs: Vec<f64> = ingest.vertices().map(|coord| coord.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_scan_is_restartable() {
        let ingest = Ingest::scan(&collection(vec![line_feature(&[
            [0.0, 0.0],
            [1.0, 1.0],
        ])]));

        // The segment sequence can be traversed repeatedly with identical results.
        assert_eq!(ingest.vertices().count(), 2);
        assert_eq!(ingest.vertices().count(), 2);
    }
}
