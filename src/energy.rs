use crate::{rope::Rope, types::Float};

/// Kinetic energy of the rope, with unit mass per point and velocity taken
/// from the last displacement over the configured fixed step.
pub fn kinetic_energy(rope: &Rope) -> Float {
    // validated positive and finite when the config was set
    let dt = rope.config().fixed_dt;
    rope.segments()
        .iter()
        .map(|s| 0.5 * (s.velocity() / dt).norm_squared())
        .sum()
}

/// Gravitational potential energy, with unit mass per point.
/// Zero at the origin.
pub fn potential_energy(rope: &Rope) -> Float {
    let g = rope.config().gravity();
    rope.segments().iter().map(|s| -g.dot(&s.pos_now)).sum()
}

pub fn total_energy(rope: &Rope) -> Float {
    kinetic_energy(rope) + potential_energy(rope)
}
