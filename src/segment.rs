//! Line segment references into feature coordinate data

use crate::PipelineFeature;
use geo::{Coord, LineString};
use std::sync::Arc;

/// One renderable ordered coordinate sequence
///
/// Derived from a whole `LineString` feature or from one sub-line of a `MultiLineString`
/// feature. Holds a back-reference to the originating feature instead of copying its
/// coordinates, so segments stay cheap to clone and hand out.
#[derive(Clone, Debug)]
pub struct LineSegment {
    /// Reference to the owning feature
    feature: Arc<PipelineFeature>,
    /// Index of this segment's line within the feature
    line_index: usize,
}

impl LineSegment {
    /// Create a segment referencing one line of a feature
    pub(crate) fn new(feature: Arc<PipelineFeature>, line_index: usize) -> Self {
        debug_assert!(line_index < feature.lines().len());
        Self {
            feature,
            line_index,
        }
    }

    /// The originating feature
    #[inline]
    pub fn feature(&self) -> &Arc<PipelineFeature> {
        &self.feature
    }

    /// Index of this segment's line within the originating feature
    ///
    /// Always `0` for a `LineString` feature.
    #[inline]
    pub fn line_index(&self) -> usize {
        self.line_index
    }

    /// The full coordinate sequence of this segment
    #[inline]
    pub fn line(&self) -> &LineString<f64> {
        &self.feature.lines()[self.line_index]
    }

    /// Coordinates as a plain slice, in traversal order
    #[inline]
    pub fn coordinates(&self) -> &[Coord<f64>] {
        &self.line().0
    }

    /// Number of vertices in this segment
    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates().len()
    }

    /// Check if this segment contains any vertices
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Feature, Geometry, Value};

    fn create_test_feature() -> Arc<PipelineFeature> {
        let raw = Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::MultiLineString(vec![
                vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![2.0, 2.0]],
                vec![vec![5.0, 5.0], vec![6.0, 6.0]],
            ]))),
            id: None,
            properties: None,
            foreign_members: None,
        };
        PipelineFeature::from_geojson(&raw).unwrap()
    }

    #[test]
    fn test_segment_references_feature_line() {
        let feature = create_test_feature();
        let segment = LineSegment::new(feature.clone(), 1);

        assert_eq!(segment.line_index(), 1);
        assert_eq!(segment.len(), 2);
        assert_eq!(segment.coordinates()[0], Coord { x: 5.0, y: 5.0 });
    }

    #[test]
    fn test_segment_shares_feature_storage() {
        let feature = create_test_feature();
        let first = LineSegment::new(feature.clone(), 0);
        let second = LineSegment::new(feature.clone(), 1);

        assert!(Arc::ptr_eq(first.feature(), second.feature()));
    }

    #[test]
    fn test_is_empty() {
        let feature = create_test_feature();
        let segment = LineSegment::new(feature, 0);
        assert!(!segment.is_empty());
        assert_eq!(segment.len(), 3);
    }
}
