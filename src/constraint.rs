use itertools::Itertools;

use crate::{anchor::Anchors, rope::RopeSegment, types::Float};

/// Hard-set the chain ends onto the anchors.
pub fn pin_endpoints(segments: &mut [RopeSegment], anchors: &Anchors) {
    if let Some(first) = segments.first_mut() {
        first.pos_now = anchors.start;
    }
    if let Some(last) = segments.last_mut() {
        last.pos_now = anchors.end;
    }
}

/// Move a pair of adjacent points toward `rest_length` apart.
/// With `pinned_first`, the whole correction goes to `second`; otherwise it
/// is split evenly between the two. Coincident points get no correction.
pub fn relax_pair(
    first: &mut RopeSegment,
    second: &mut RopeSegment,
    rest_length: Float,
    pinned_first: bool,
) {
    let delta = first.pos_now - second.pos_now;
    let dist = delta.norm();
    let error = (dist - rest_length).abs();

    // Points toward `first` when stretched, toward `second` when compressed
    let direction = if dist > rest_length {
        delta.try_normalize(0.)
    } else if dist < rest_length {
        (-delta).try_normalize(0.)
    } else {
        None
    };
    let Some(direction) = direction else {
        return;
    };

    let change = direction * error;
    if pinned_first {
        second.pos_now += change;
    } else {
        first.pos_now -= change * 0.5;
        second.pos_now += change * 0.5;
    }
}

/// One relaxation pass: pin both ends, then sweep the adjacent pairs left to
/// right. Each pair sees the corrections already made earlier in the sweep.
pub fn apply_constraints(segments: &mut [RopeSegment], anchors: &Anchors, rest_length: Float) {
    pin_endpoints(segments, anchors);

    for i in 0..segments.len().saturating_sub(1) {
        let (head, tail) = segments.split_at_mut(i + 1);
        relax_pair(&mut head[i], &mut tail[0], rest_length, i == 0);
    }
}

/// Run a fixed number of relaxation passes. More passes give a stiffer rope.
/// The ends are pinned again after the last pass, so they sit exactly on the
/// anchors even when the chain has not reached rest length.
pub fn solve(
    segments: &mut [RopeSegment],
    anchors: &Anchors,
    rest_length: Float,
    iterations: usize,
) {
    for _ in 0..iterations {
        apply_constraints(segments, anchors, rest_length);
    }
    pin_endpoints(segments, anchors);
}

/// Largest deviation of an adjacent pair's distance from `rest_length`
pub fn max_stretch_error(segments: &[RopeSegment], rest_length: Float) -> Float {
    segments
        .iter()
        .tuple_windows()
        .map(|(a, b)| ((a.pos_now - b.pos_now).norm() - rest_length).abs())
        .fold(0., Float::max)
}

#[cfg(test)]
mod constraint_tests {
    use na::vector;

    use crate::{assert_close, assert_vec_close, rope::seed, types::Point2};

    use super::*;

    fn segment(x: Float, y: Float) -> RopeSegment {
        RopeSegment::new(vector![x, y])
    }

    #[test]
    fn stretched_pair_pulled_together() {
        // Arrange
        let mut a = segment(0., 0.);
        let mut b = segment(3., 0.);

        // Act
        relax_pair(&mut a, &mut b, 1., false);

        // Assert
        assert_vec_close!(a.pos_now, vector![1., 0.], 1e-6);
        assert_vec_close!(b.pos_now, vector![2., 0.], 1e-6);
    }

    #[test]
    fn compressed_pair_pushed_apart() {
        // Arrange
        let mut a = segment(0., 0.);
        let mut b = segment(0., -0.5);

        // Act
        relax_pair(&mut a, &mut b, 1., false);

        // Assert
        assert_vec_close!(a.pos_now, vector![0., 0.25], 1e-6);
        assert_vec_close!(b.pos_now, vector![0., -0.75], 1e-6);
    }

    #[test]
    fn pinned_first_moves_only_second() {
        // Arrange
        let mut a = segment(0., 0.);
        let mut b = segment(0., -3.);

        // Act
        relax_pair(&mut a, &mut b, 1., true);

        // Assert
        assert_eq!(a.pos_now, vector![0., 0.]);
        assert_vec_close!(b.pos_now, vector![0., -1.], 1e-6);
    }

    #[test]
    fn coincident_points_stay_finite() {
        // Arrange
        let mut a = segment(2., 2.);
        let mut b = segment(2., 2.);

        // Act
        relax_pair(&mut a, &mut b, 1., false);

        // Assert
        assert_eq!(a.pos_now, vector![2., 2.]);
        assert_eq!(b.pos_now, vector![2., 2.]);
    }

    #[test]
    fn at_rest_no_change() {
        let mut a = segment(0., 0.);
        let mut b = segment(0., -1.);
        relax_pair(&mut a, &mut b, 1., false);
        assert_eq!(b.pos_now, vector![0., -1.]);
    }

    #[test]
    fn pass_pins_ends() {
        // Arrange
        let mut segments = seed(&vector![0., 0.], 5, 0.5);
        let anchors = Anchors::new(vector![1., 1.], vector![4., 1.]);

        // Act
        apply_constraints(&mut segments, &anchors, 0.5);

        // Assert
        assert_eq!(segments[0].pos_now, anchors.start);
        // The last point is pinned before the sweep, so it may have moved
        // off the anchor during the final pair correction.
        assert!(segments.iter().all(|s| s.pos_now.iter().all(|c| c.is_finite())));
    }

    /// Pairs are relaxed first to last, each one starting from the points
    /// the previous pair already moved.
    #[test]
    fn sweep_runs_first_to_last() {
        // Arrange
        let mut segments = vec![
            segment(0., 0.),
            segment(3., 0.),
            segment(4., 0.),
            segment(6., 0.),
        ];
        let anchors = Anchors::new(vector![0., 0.], vector![6., 0.]);

        // Act
        apply_constraints(&mut segments, &anchors, 1.);

        // Assert
        // pair 0: point 1 takes the full correction, 3 -> 1
        // pair 1: 1 and 4 are 3 apart, each moves 1 -> 2 and 3
        // pair 2: 3 and 6 are 3 apart, each moves 1 -> 4 and 5
        assert_eq!(segments[0].pos_now, anchors.start);
        assert_vec_close!(segments[1].pos_now, vector![2., 0.], 1e-6);
        assert_vec_close!(segments[2].pos_now, vector![4., 0.], 1e-6);
        assert_vec_close!(segments[3].pos_now, vector![5., 0.], 1e-6);
    }

    #[test]
    fn converges_to_straight_line() {
        // Arrange
        let n = 10;
        let rest = 0.5;
        let start: Point2 = vector![0., 0.];
        let end: Point2 = vector![0., -((n - 1) as Float) * rest];
        let mut segments = seed(&start, n, rest);
        for (i, s) in segments[1..n - 1].iter_mut().enumerate() {
            s.pos_now.x += if i % 2 == 0 { 0.01 } else { -0.01 };
        }

        // Act
        solve(&mut segments, &Anchors::new(start, end), rest, 50);

        // Assert
        assert_close!(max_stretch_error(&segments, rest), 0., 1e-3);
        assert_eq!(segments[0].pos_now, start);
        assert_eq!(segments[n - 1].pos_now, end);
    }

    #[test]
    fn solve_ends_pinned_when_overstretched() {
        // Arrange
        let mut segments = seed(&vector![0., 0.], 4, 0.5);
        let anchors = Anchors::new(vector![-10., 0.], vector![10., 5.]);

        // Act
        solve(&mut segments, &anchors, 0.5, 50);

        // Assert
        assert_eq!(segments[0].pos_now, anchors.start);
        assert_eq!(segments[3].pos_now, anchors.end);
    }

    #[test]
    fn stretch_error_of_seeded_chain() {
        let segments = seed(&vector![0., 0.], 6, 0.25);
        assert_close!(max_stretch_error(&segments, 0.25), 0., 1e-6);
        assert_close!(max_stretch_error(&segments, 0.5), 0.25, 1e-6);
    }
}
