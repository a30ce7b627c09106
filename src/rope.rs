use na::{vector, Vector3};

use crate::{
    config::{
        validate_gravity, validate_iterations, validate_line_width, validate_rest_length,
        validate_segment_count, ConfigError, RopeConfig,
    },
    flog,
    types::{Float, Point2},
};

/// A single point mass of the chain. Velocity is implicit in the difference
/// between the current and previous positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopeSegment {
    pub pos_now: Point2,
    pub pos_old: Point2,
}

impl RopeSegment {
    /// A point at rest at `pos`
    pub fn new(pos: Point2) -> Self {
        Self {
            pos_now: pos,
            pos_old: pos,
        }
    }

    /// Displacement over the last step
    pub fn velocity(&self) -> Point2 {
        self.pos_now - self.pos_old
    }
}

/// Lay out `count` points at rest in a straight vertical drop below `start`,
/// `seg_len` apart.
pub fn seed(start: &Point2, count: usize, seg_len: Float) -> Vec<RopeSegment> {
    let mut segments = Vec::with_capacity(count);
    append_drop(&mut segments, start, count, seg_len);
    segments
}

/// Push `count` points at rest, the first at `from`, each following one
/// `seg_len` lower.
fn append_drop(segments: &mut Vec<RopeSegment>, from: &Point2, count: usize, seg_len: Float) {
    let mut p = *from;
    for _ in 0..count {
        segments.push(RopeSegment::new(p));
        p.y -= seg_len;
    }
}

/// Ordered chain of points plus the parameters that drive it.
/// Index 0 follows the start anchor, the last index follows the end anchor.
pub struct Rope {
    pub(crate) segments: Vec<RopeSegment>,
    pub(crate) config: RopeConfig,
}

impl Rope {
    pub fn new(start_anchor: &Point2, config: RopeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let segments = seed(
            start_anchor,
            config.segment_count,
            config.segment_rest_length,
        );
        flog!(
            "rope created with {} points, rest length {}",
            config.segment_count,
            config.segment_rest_length
        );
        Ok(Rope { segments, config })
    }

    /// Bring the chain length to the configured segment count.
    /// Shrinking drops points at the end-anchor side; growing appends points
    /// at rest hanging down from the current last point. No-op when the
    /// length already matches.
    pub fn resize(&mut self) {
        let target = self.config.segment_count;
        let current = self.segments.len();
        if current == target {
            return;
        }

        if current > target {
            self.segments.truncate(target);
        } else if let Some(last) = self.segments.last() {
            let from = last.pos_now;
            append_drop(
                &mut self.segments,
                &from,
                target - current,
                self.config.segment_rest_length,
            );
        }
        flog!("rope resized from {} to {} points", current, target);
    }

    pub fn set_segment_count(&mut self, count: usize) -> Result<(), ConfigError> {
        validate_segment_count(count)?;
        self.config.segment_count = count;
        Ok(())
    }

    pub fn set_segment_rest_length(&mut self, length: Float) -> Result<(), ConfigError> {
        validate_rest_length(length)?;
        self.config.segment_rest_length = length;
        Ok(())
    }

    pub fn set_gravity(&mut self, gravity: Point2) -> Result<(), ConfigError> {
        validate_gravity(&gravity)?;
        self.config.gravity = [gravity.x, gravity.y];
        Ok(())
    }

    pub fn set_constraint_iterations(&mut self, iterations: usize) -> Result<(), ConfigError> {
        validate_iterations(iterations)?;
        self.config.constraint_iterations = iterations;
        Ok(())
    }

    pub fn set_line_width(&mut self, width: Float) -> Result<(), ConfigError> {
        validate_line_width(width)?;
        self.config.line_width = width;
        Ok(())
    }

    pub fn config(&self) -> &RopeConfig {
        &self.config
    }

    pub fn segments(&self) -> &[RopeSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Current positions, without resizing
    pub fn positions(&self) -> Vec<Point2> {
        self.segments.iter().map(|s| s.pos_now).collect()
    }

    /// Positions for a line-strip renderer, one per configured segment,
    /// lifted into 3D with z = 0.
    pub fn render_positions(&mut self) -> Vec<Vector3<Float>> {
        self.resize();
        self.segments
            .iter()
            .map(|s| vector![s.pos_now.x, s.pos_now.y, 0.])
            .collect()
    }
}
