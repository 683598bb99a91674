use nalgebra as na;

pub type Vec3 = na::Vector3<f64>;
pub type Vec2 = na::Vector2<f64>;
/// Linear RGB radiance or reflectance.
pub type Color = na::Vector3<f64>;
