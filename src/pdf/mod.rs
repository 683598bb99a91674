pub mod blinnphong;
pub mod cosine;
pub mod hitable;

use crate::aliases::{Vec2, Vec3};
use crate::sampler::Sampler;
use std::f64::consts::PI;

/// Probability distribution function on directions
pub trait Pdf {
    /// Probability density at a direction with respect to solid angle.
    /// dir is not required to be normalized
    fn density(&self, dir: &Vec3) -> f64;
    /// Generates a radom direction following this pdf.
    fn generate(&self, sampler: &mut dyn Sampler) -> Vec3;
}

pub fn random_in_unit_sphere(sampler: &mut dyn Sampler) -> Vec3 {
    loop {
        let p = 2.0 * sampler.sample_3d() - Vec3::new(1.0, 1.0, 1.0);
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

pub fn random_in_unit_disc(sampler: &mut dyn Sampler) -> Vec2 {
    loop {
        let p = 2.0 * sampler.sample_2d() - Vec2::new(1.0, 1.0);
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniformly distributed on the unit sphere.
pub fn random_unit_vector(sampler: &mut dyn Sampler) -> Vec3 {
    random_in_cone(-1.0, sampler)
}

/// Calculates a random point on a unit hemisphere (x^2+y^2+z^2=1, z>=0)
/// such that pdf(d)/sin(t) ~= cos(t) where t is angle between d and n=(0,0,1)
pub fn random_cosine_direction(sampler: &mut dyn Sampler) -> Vec3 {
    let r = sampler.sample_2d();
    let rr0 = r[0].sqrt();
    let angle = 2.0 * PI * r[1];
    let z = (1.0 - r[0]).sqrt();
    Vec3::new(angle.cos() * rr0, angle.sin() * rr0, z)
}

/// A random direction around n=(0,0,1) with density (e+1) cos^e(t) / 2PI.
pub fn random_in_lobe(exponent: f64, sampler: &mut dyn Sampler) -> Vec3 {
    let r = sampler.sample_2d();
    let z = r[0].powf(1.0 / (exponent + 1.0));
    let sine = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * r[1];
    Vec3::new(phi.cos() * sine, phi.sin() * sine, z)
}

/// Generate uniformly a random (normalized) direction vector in a cone
pub fn random_in_cone(cos_half_angle: f64, sampler: &mut dyn Sampler) -> Vec3 {
    let r = sampler.sample_2d();
    let z = 1.0 + r[0] * (cos_half_angle - 1.0);
    let sine = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * r[1];
    Vec3::new(phi.cos() * sine, phi.sin() * sine, z)
}
