use crate::aliases::Vec3;
use crate::hitable::Hitable;
use crate::pdf::Pdf;
use crate::sampler::Sampler;

/// Directions from `origin` toward a hitable, distributed by its solid angle.
/// Used for sampling lights.
pub struct HitablePdf<'a> {
    origin: Vec3,
    hitable: &'a dyn Hitable,
}

impl<'a> HitablePdf<'a> {
    pub fn new(hitable: &'a dyn Hitable, origin: &Vec3) -> Self {
        HitablePdf {
            hitable,
            origin: *origin,
        }
    }
}

impl<'a> Pdf for HitablePdf<'a> {
    fn density(&self, dir: &Vec3) -> f64 {
        self.hitable.direction_density(&self.origin, dir)
    }
    fn generate(&self, sampler: &mut dyn Sampler) -> Vec3 {
        let ret = self.hitable.random_direction_from(&self.origin, sampler);
        debug_assert!(ret.norm().is_finite() && ret.norm() > 0.0);
        ret
    }
}
