pub mod flip_face;
pub mod hitable_list;
pub mod sphere;

use crate::aliases::Vec3;
use crate::hit_record::HitRecord;
use crate::ray::Ray;
use crate::sampler::Sampler;

pub trait Hitable: Send + Sync {
    /// The nearest intersection with t in (t_min, t_max), if any.
    fn hit<'s>(&'s self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord<'s>>;
    /// Solid-angle density of `random_direction_from(origin)` at `dir`.
    /// Hitables that cannot be sampled as lights have density zero everywhere.
    fn direction_density(&self, _origin: &Vec3, _dir: &Vec3) -> f64 {
        0.0
    }
    /// A random direction from `origin` toward this hitable.
    fn random_direction_from(&self, _origin: &Vec3, _sampler: &mut dyn Sampler) -> Vec3 {
        Vec3::new(1.0, 0.0, 0.0)
    }
}
