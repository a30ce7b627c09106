use na::Vector2;

pub type Float = f32;

/// Planar position/velocity of a rope point
pub type Point2 = Vector2<Float>;
