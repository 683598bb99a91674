use crate::aliases::Vec3;
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::ray::Ray;
use crate::sampler::Sampler;
use std::sync::Arc;

/// Swaps which side of the wrapped hitable counts as the front face.
pub struct FlipFace(Arc<dyn Hitable>);

impl FlipFace {
    pub fn new(hitable: Arc<dyn Hitable>) -> Self {
        FlipFace(hitable)
    }
}

impl Hitable for FlipFace {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord<'s>> {
        self.0.hit(ray, t_min, t_max).map(|mut rec| {
            rec.front_face = !rec.front_face;
            rec
        })
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f64 {
        self.0.direction_density(origin, dir)
    }
    fn random_direction_from(&self, origin: &Vec3, sampler: &mut dyn Sampler) -> Vec3 {
        self.0.random_direction_from(origin, sampler)
    }
}
