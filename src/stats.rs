//! Summary statistics for an ingestion cycle

use crate::ingest::Ingest;
use geo::{BoundingRect, Coord, Rect};
use serde::{Deserialize, Serialize};

/// Summary figures derived from the ingested features and classified nodes
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Features that ingested successfully
    pub total_features: usize,
    /// One per feature of a supported line kind, regardless of sub-line expansion
    pub line_count: usize,
    /// Number of distinct vertex locations
    pub node_count: usize,
    /// Features with `LineString` geometry
    pub line_strings: usize,
    /// Features with `MultiLineString` geometry
    pub multi_line_strings: usize,
    /// Extent of all rendered geometry in WGS84 degrees, `None` when no vertices exist
    pub bounding_box: Option<Rect<f64>>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Statistics {
    /// Derive summary figures from a completed scan and node count
    pub(crate) fn summarize(ingest: &Ingest, node_count: usize) -> Self {
        Self {
            total_features: ingest.features.len(),
            line_count: ingest.line_strings + ingest.multi_line_strings,
            node_count,
            line_strings: ingest.line_strings,
            multi_line_strings: ingest.multi_line_strings,
            bounding_box: combined_bounding_box(ingest),
        }
    }

    /// Center of the bounding box, for initial map positioning
    #[inline]
    pub fn center(&self) -> Option<Coord<f64>> {
        self.bounding_box.map(|rect| rect.center())
    }

    /// Approximate coverage area in squared degrees (bounding-box width x height)
    #[inline]
    pub fn coverage_degrees(&self) -> Option<f64> {
        self.bounding_box.map(|rect| rect.width() * rect.height())
    }
}

/// Combined extent of every segment, from per-line rects of the geometry utility
fn combined_bounding_box(ingest: &Ingest) -> Option<Rect<f64>> {
    let mut combined: Option<Rect<f64>> = None;
    for segment in &ingest.segments {
        // A segment without vertices has no extent
        let Some(rect) = segment.line().bounding_rect() else {
            continue;
        };
        combined = Some(match combined {
            Some(bbox) => merge_rects(bbox, rect),
            None => rect,
        });
    }
    combined
}

fn merge_rects(a: Rect<f64>, b: Rect<f64>) -> Rect<f64> {
    Rect::new(
        Coord {
            x: a.min().x.min(b.min().x),
            y: a.min().y.min(b.min().y),
        },
        Coord {
            x: a.max().x.max(b.max().x),
            y: a.max().y.max(b.max().y),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Feature, FeatureCollection, Geometry, Value};

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
    fn test_summarize_counts() {
        let ingest = Ingest::scan(&collection(vec![
            line_feature(&[[0.0, 0.0], [1.0, 1.0]]),
            line_feature(&[[1.0, 1.0], [2.0, 2.0]]),
        ]));
        let stats = Statistics::summarize(&ingest, 3);

        assert_eq!(stats.total_features, 2);
        assert_eq!(stats.line_count, 2);
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.line_strings, 2);
        assert_eq!(stats.multi_line_strings, 0);
    }

    #[test]
    fn test_bounding_box_spans_all_segments() {
        let ingest = Ingest::scan(&collection(vec![
            line_feature(&[[0.0, 0.0], [1.0, 2.0]]),
            line_feature(&[[-3.0, 5.0], [4.0, -1.0]]),
        ]));
        let stats = Statistics::summarize(&ingest, 4);

        let bbox = stats.bounding_box.unwrap();
        assert_eq!(bbox.min(), Coord { x: -3.0, y: -1.0 });
        assert_eq!(bbox.max(), Coord { x: 4.0, y: 5.0 });
    }

    #[test]
    fn test_center_and_coverage() {
        let ingest = Ingest::scan(&collection(vec![line_feature(&[
            [0.0, 0.0],
            [2.0, 4.0],
        ])]));
        let stats = Statistics::summarize(&ingest, 2);

        assert_eq!(stats.center(), Some(Coord { x: 1.0, y: 2.0 }));
        assert_eq!(stats.coverage_degrees(), Some(8.0));
    }

    #[test]
    fn test_empty_collection_has_no_extent() {
        let ingest = Ingest::scan(&collection(vec![]));
        let stats = Statistics::summarize(&ingest, 0);

        assert!(stats.bounding_box.is_none());
        assert!(stats.center().is_none());
        assert!(stats.coverage_degrees().is_none());
    }
}
