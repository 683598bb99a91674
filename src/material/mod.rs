pub mod blinn_phong;
pub mod diffuse_light;
pub mod glass;
pub mod lambertian;
pub mod metal;
pub mod phong;

use crate::aliases::{Color, Vec3};
use crate::hit_record::HitRecord;
use crate::ray::Ray;
use crate::sampler::Sampler;
use crate::scatter_record::ScatterRecord;

/// Surface scattering behaviour.
///
/// `eval` and `pdf` must be consistent with the distribution `sample` draws
/// from, so that `eval / pdf` is an unbiased estimate of the reflected light.
pub trait Material: Send + Sync {
    /// Calculates the emitted light from HitRecord.
    fn emitted(&self, _ray_in: &Ray, _rec: &HitRecord, _u: f64, _v: f64, _point: &Vec3) -> Color {
        Color::zeros()
    }
    /// Draws the next direction, or None when this Material absorbs the ray.
    fn sample(
        &self,
        _dir_in: &Vec3,
        _rec: &HitRecord,
        _sampler: &mut dyn Sampler,
    ) -> Option<ScatterRecord> {
        None
    }
    /// BRDF * cos(angle between dir_out and rec.normal).
    /// For specular materials, the weight of the chosen delta event.
    fn eval(&self, _dir_in: &Vec3, _rec: &HitRecord, _dir_out: &Vec3) -> Color {
        Color::zeros()
    }
    /// Density of dir_out under the distribution `sample` draws from.
    fn pdf(&self, _dir_in: &Vec3, _rec: &HitRecord, _dir_out: &Vec3) -> f64 {
        0.0
    }
    /// Density of the direction stored in `srec`, read from its own distribution.
    fn scatter_pdf(&self, _dir_in: &Vec3, _rec: &HitRecord, srec: &ScatterRecord) -> f64 {
        match srec {
            ScatterRecord::Sampled { direction, pdf } => pdf.density(direction),
            ScatterRecord::Specular { .. } => 0.0,
        }
    }
}

/// * `n` - must be normalized
pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
    debug_assert!((n.norm() - 1.0).abs() < 1e-3);
    v - 2.0 * v.dot(n) * n
}

/// Refracts the normalized `uv` through a surface with normal `n` (against uv),
/// `etai_over_etat` being the ratio of refractive indices.
pub fn refract(uv: &Vec3, n: &Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.norm_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Approximation formula of probability of reflection when a light enter into a material
pub fn schlick_formula(cosine: f64, ref_idx: f64) -> f64 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
