use na::Vector3;

use crate::{
    anchor::{AnchorSource, Anchors, DebugGizmos, DEFAULT_GIZMO_RADIUS},
    config::{ConfigError, RopeConfig},
    constraint::solve,
    integrators::Integrator,
    rope::Rope,
    types::{Float, Point2},
};

/// Longest frame time fed to the fixed-step accumulator. Longer frames are
/// clamped, so a stalled host does not trigger a burst of catch-up steps.
pub const MAX_FRAME_DT: Float = 1. / 3.;

/// Step the rope forward by dt seconds.
/// Order matters: the chain is resized first so integration and the
/// constraint sweeps see a stable length.
pub fn step(rope: &mut Rope, anchors: &Anchors, dt: Float, integrator: &Integrator) {
    rope.resize();

    let gravity = rope.config.gravity();
    integrator.integrate(&mut rope.segments, &gravity, dt);

    solve(
        &mut rope.segments,
        anchors,
        rope.config.segment_rest_length,
        rope.config.constraint_iterations,
    );
}

/// Simulate the rope from 0 to final_time with a time step of dt, reading
/// the anchors from `anchor_fn` at the start of each step.
/// Returns the positions before the first step and after each step.
pub fn simulate<F>(
    rope: &mut Rope,
    final_time: Float,
    dt: Float,
    anchor_fn: F,
) -> Vec<Vec<Point2>>
where
    F: Fn(Float) -> Anchors,
{
    let mut t = 0.0;
    let mut history = vec![rope.positions()];
    while t < final_time {
        let anchors = anchor_fn(t);
        step(rope, &anchors, dt, &Integrator::Verlet);
        history.push(rope.positions());

        t += dt;
    }

    history
}

/// Owns a rope and the source of its anchors. The host drives it through
/// two entry points: `step`/`advance` at the physics rate and
/// `render_positions` at the frame rate.
pub struct RopeSimulator<A: AnchorSource = Anchors> {
    pub rope: Rope,
    pub source: A,
    pub integrator: Integrator,
    accumulator: Float,
}

impl RopeSimulator<Anchors> {
    /// A rope seeded hanging below the start anchor
    pub fn new(config: RopeConfig, anchors: Anchors) -> Result<Self, ConfigError> {
        Self::with_source(config, anchors)
    }

    pub fn set_anchors(&mut self, anchors: Anchors) {
        self.source = anchors;
    }
}

impl<A: AnchorSource> RopeSimulator<A> {
    pub fn with_source(config: RopeConfig, source: A) -> Result<Self, ConfigError> {
        let start = source.anchors().start;
        let rope = Rope::new(&start, config)?;
        Ok(Self {
            rope,
            source,
            integrator: Integrator::default(),
            accumulator: 0.,
        })
    }

    /// One fixed step of dt seconds, with the anchors read now
    pub fn step(&mut self, dt: Float) {
        let anchors = self.source.anchors();
        step(&mut self.rope, &anchors, dt, &self.integrator);
    }

    /// Accumulate frame time and run as many whole fixed steps as it covers.
    /// Returns the number of steps taken.
    pub fn advance(&mut self, frame_dt: Float) -> usize {
        if !frame_dt.is_finite() || frame_dt <= 0. {
            return 0;
        }
        self.accumulator += frame_dt.min(MAX_FRAME_DT);

        let fixed_dt = self.rope.config.fixed_dt;
        let mut n_steps = 0;
        while self.accumulator >= fixed_dt {
            self.step(fixed_dt);
            self.accumulator -= fixed_dt;
            n_steps += 1;
        }
        n_steps
    }

    /// Time carried over to the next `advance`
    pub fn pending_time(&self) -> Float {
        self.accumulator
    }

    pub fn render_positions(&mut self) -> Vec<Vector3<Float>> {
        self.rope.render_positions()
    }

    pub fn line_width(&self) -> Float {
        self.rope.config.line_width
    }

    pub fn gizmos(&self) -> DebugGizmos {
        self.source.anchors().gizmos(DEFAULT_GIZMO_RADIUS)
    }
}
