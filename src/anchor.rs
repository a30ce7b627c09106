use na::Vector3;

use crate::types::{Float, Point2};

pub const DEFAULT_GIZMO_RADIUS: Float = 0.1;

/// World positions the two ends of a rope are pinned to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub start: Point2,
    pub end: Point2,
}

impl Anchors {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// From 3D host transforms. Only x and y are used.
    pub fn from_world(start: &Vector3<Float>, end: &Vector3<Float>) -> Self {
        Self {
            start: planar(start),
            end: planar(end),
        }
    }

    /// Distance between the anchors
    pub fn span(&self) -> Float {
        (self.end - self.start).norm()
    }

    /// Editor markers: a sphere on each anchor and the line between them
    pub fn gizmos(&self, radius: Float) -> DebugGizmos {
        DebugGizmos {
            spheres: [(self.start, radius), (self.end, radius)],
            line: (self.start, self.end),
        }
    }
}

/// Drop the z component of a world position
pub fn planar(p: &Vector3<Float>) -> Point2 {
    p.xy()
}

/// Source of anchor positions, read once per step. Implemented by whatever
/// owns the anchor transforms.
pub trait AnchorSource {
    fn anchors(&self) -> Anchors;
}

impl AnchorSource for Anchors {
    fn anchors(&self) -> Anchors {
        *self
    }
}

/// Debug geometry for the anchors, drawn by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugGizmos {
    pub spheres: [(Point2, Float); 2], // (center, radius)
    pub line: (Point2, Point2),
}

#[cfg(test)]
mod anchor_tests {
    use na::vector;

    use crate::assert_close;

    use super::*;

    #[test]
    fn from_world_drops_z() {
        let anchors = Anchors::from_world(&vector![1., 2., 3.], &vector![4., 5., -6.]);
        assert_eq!(anchors.start, vector![1., 2.]);
        assert_eq!(anchors.end, vector![4., 5.]);
    }

    #[test]
    fn span() {
        let anchors = Anchors::new(vector![0., 0.], vector![3., 4.]);
        assert_close!(anchors.span(), 5., 1e-6);
    }

    #[test]
    fn gizmos_mark_both_anchors() {
        // Arrange
        let anchors = Anchors::new(vector![-1., 0.], vector![1., 0.]);

        // Act
        let gizmos = anchors.gizmos(DEFAULT_GIZMO_RADIUS);

        // Assert
        assert_eq!(gizmos.spheres[0], (anchors.start, 0.1));
        assert_eq!(gizmos.spheres[1], (anchors.end, 0.1));
        assert_eq!(gizmos.line, (anchors.start, anchors.end));
    }

    #[test]
    fn static_source() {
        let anchors = Anchors::new(vector![0., 1.], vector![2., 1.]);
        let source: &dyn AnchorSource = &anchors;
        assert_eq!(source.anchors(), anchors);
    }
}
