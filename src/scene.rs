use crate::aliases::Color;
use crate::background::{AmbientLight, Background};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::ray::Ray;
use std::sync::Arc;

/// Rays start this far from their origin, so that a bounce does not hit the
/// surface it leaves.
pub const T_MIN: f64 = 0.001;

pub struct Scene {
    pub hitables: Arc<dyn Hitable>, // rendered hitables
    pub lights: Option<Arc<dyn Hitable>>, // hitables sampled directly by light-sampling strategies
    pub bg: Arc<dyn Background>,
}

impl Scene {
    pub fn new(hitables: Arc<dyn Hitable>) -> Self {
        Scene {
            hitables,
            lights: None,
            bg: Arc::new(AmbientLight::black()),
        }
    }
    pub fn with_lights(mut self, lights: Arc<dyn Hitable>) -> Self {
        self.lights = Some(lights);
        self
    }
    pub fn with_background(mut self, bg: Arc<dyn Background>) -> Self {
        self.bg = bg;
        self
    }
    pub fn hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.hitables.hit(ray, T_MIN, std::f64::MAX)
    }
    pub fn background(&self, ray: &Ray) -> Color {
        self.bg.color(ray)
    }
}
