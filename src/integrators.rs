use crate::{
    rope::RopeSegment,
    types::{Float, Point2},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Integrator {
    /// Position Verlet: velocity is never stored, only inferred from the
    /// last displacement.
    #[default]
    Verlet,
}

impl Integrator {
    pub fn integrate(&self, segments: &mut [RopeSegment], gravity: &Point2, dt: Float) {
        match self {
            Integrator::Verlet => verlet(segments, gravity, dt),
        }
    }
}

/// Advance every point but the first one step under gravity.
/// The first point is pinned to the start anchor by the constraint pass.
///
/// x_{n+1} = x_n + (x_n - x_{n-1}) + g * dt
///
/// Note: gravity is scaled by dt, not dt^2, so `gravity` acts as a per-step
/// velocity increment at the reference rate.
pub fn verlet(segments: &mut [RopeSegment], gravity: &Point2, dt: Float) {
    let dv = gravity * dt;
    for segment in segments.iter_mut().skip(1) {
        let velocity = segment.velocity();
        segment.pos_old = segment.pos_now;
        segment.pos_now += velocity + dv;
    }
}
