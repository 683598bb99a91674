use crate::aliases::Color;
use crate::ray::Ray;

/// Radiance carried by rays which escape the scene.
pub trait Background: Send + Sync {
    fn color(&self, ray: &Ray) -> Color;
}

pub struct AmbientLight {
    color: Color,
}

impl AmbientLight {
    pub fn new(color: &Color) -> Self {
        Self { color: *color }
    }
    pub fn black() -> Self {
        Self::new(&Color::zeros())
    }
}

impl Background for AmbientLight {
    fn color(&self, _ray: &Ray) -> Color {
        self.color
    }
}
