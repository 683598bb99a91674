use crate::aliases::{Color, Vec3};
use crate::hit_record::HitRecord;
use crate::material::{reflect, refract, schlick_formula, Material};
use crate::ray::Ray;
use crate::sampler::Sampler;
use crate::scatter_record::ScatterRecord;

/// A refractive material which either reflects or refracts, chosen with
/// Schlick's reflectance.
pub struct Dielectric {
    pub ref_idx: f64,
}

impl Dielectric {
    pub fn new(ref_idx: f64) -> Self {
        Dielectric { ref_idx }
    }
}

impl Material for Dielectric {
    fn sample(
        &self,
        dir_in: &Vec3,
        rec: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterRecord> {
        // r = relative refractive index
        let r = if rec.front_face {
            1.0 / self.ref_idx
        } else {
            self.ref_idx
        };
        let unit_dir = dir_in.normalize();
        let cos_theta = (-unit_dir).dot(&rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
        let cannot_refract = r * sin_theta > 1.0;
        let direction =
            if cannot_refract || schlick_formula(cos_theta, r) > sampler.sample_1d() {
                reflect(&unit_dir, &rec.normal)
            } else {
                refract(&unit_dir, &rec.normal, r)
            };
        Some(ScatterRecord::Specular {
            ray: Ray::new(&rec.point, &direction),
        })
    }
    /// The choice between both branches already carries the Fresnel weight.
    fn eval(&self, _dir_in: &Vec3, _rec: &HitRecord, _dir_out: &Vec3) -> Color {
        Color::new(1.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Dielectric;
    use crate::aliases::{Color, Vec2, Vec3};
    use crate::hit_record::HitRecord;
    use crate::material::{schlick_formula, Material};
    use crate::ray::Ray;
    use crate::sampler::RandomSampler;
    use crate::scatter_record::ScatterRecord;

    #[test]
    fn reflection_frequency_follows_schlick() {
        let glass = Dielectric::new(1.5);
        let dir_in = Vec3::new(0.0, -1.0, 0.0);
        let ray = Ray::new(&Vec3::new(0.0, 1.0, 0.0), &dir_in);
        let rec = HitRecord::new(&ray, 1.0, &Vec3::new(0.0, 1.0, 0.0), Vec2::zeros(), &glass);
        let mut sampler = RandomSampler::new(1, 91);
        const N: usize = 100_000;
        let mut reflected = 0;
        for _ in 0..N {
            match glass.sample(&dir_in, &rec, &mut sampler) {
                Some(ScatterRecord::Specular { ray }) => {
                    if ray.direction[1] > 0.0 {
                        reflected += 1;
                    }
                }
                _ => panic!("dielectric scatters specularly"),
            }
        }
        let expected = schlick_formula(1.0, 1.0 / 1.5);
        let freq = reflected as f64 / N as f64;
        assert!((freq - expected).abs() < 0.005, "freq: {}", freq);
        assert_eq!(glass.eval(&dir_in, &rec, &dir_in), Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn total_internal_reflection_from_inside() {
        let glass = Dielectric::new(1.5);
        // leaving the medium at a grazing angle
        let dir_in = Vec3::new(1.0, 0.3, 0.0);
        let ray = Ray::new(&Vec3::new(-1.0, -0.3, 0.0), &dir_in);
        let rec = HitRecord::new(&ray, 1.0, &Vec3::new(0.0, 1.0, 0.0), Vec2::zeros(), &glass);
        assert!(!rec.front_face);
        let mut sampler = RandomSampler::new(1, 92);
        for _ in 0..100 {
            match glass.sample(&dir_in, &rec, &mut sampler) {
                Some(ScatterRecord::Specular { ray }) => assert!(ray.direction[1] < 0.0),
                _ => panic!("dielectric scatters specularly"),
            }
        }
    }
}
