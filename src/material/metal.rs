use crate::aliases::{Color, Vec3};
use crate::hit_record::HitRecord;
use crate::material::{reflect, Material};
use crate::pdf::random_in_unit_sphere;
use crate::ray::Ray;
use crate::sampler::Sampler;
use crate::scatter_record::ScatterRecord;

/// Mirror reflection perturbed by `fuzziness` (0 = perfect mirror).
pub struct Metal {
    pub albedo: Color,
    pub fuzziness: f64,
}

impl Metal {
    pub fn new(albedo: &Color, fuzziness: f64) -> Self {
        Metal {
            albedo: *albedo,
            fuzziness: fuzziness.max(0.0).min(1.0),
        }
    }
}

impl Material for Metal {
    fn sample(
        &self,
        dir_in: &Vec3,
        rec: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterRecord> {
        let reflected = reflect(&dir_in.normalize(), &rec.normal);
        let fuz = if self.fuzziness == 0.0 {
            Vec3::zeros()
        } else {
            self.fuzziness * random_in_unit_sphere(sampler)
        };
        Some(ScatterRecord::Specular {
            ray: Ray::new(&rec.point, &(reflected + fuz)),
        })
    }
    fn eval(&self, _dir_in: &Vec3, _rec: &HitRecord, _dir_out: &Vec3) -> Color {
        self.albedo
    }
}
