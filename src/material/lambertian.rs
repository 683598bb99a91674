use crate::aliases::{Color, Vec3};
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::pdf::cosine::CosinePdf;
use crate::pdf::Pdf;
use crate::sampler::Sampler;
use crate::scatter_record::ScatterRecord;
use crate::texture::constant::ConstantTexture;
use crate::texture::Texture;
use std::f64::consts::PI;
use std::sync::Arc;

pub struct Lambertian {
    pub albedo: Arc<dyn Texture>,
}

impl Lambertian {
    pub fn new(texture: Arc<dyn Texture>) -> Self {
        Lambertian { albedo: texture }
    }
    pub fn from_color(albedo: &Color) -> Self {
        Lambertian {
            albedo: ConstantTexture::shared(albedo),
        }
    }
}

impl Material for Lambertian {
    fn sample(
        &self,
        _dir_in: &Vec3,
        rec: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterRecord> {
        let pdf = CosinePdf::boxed(&rec.normal);
        Some(ScatterRecord::Sampled {
            direction: pdf.generate(sampler),
            pdf,
        })
    }
    fn eval(&self, _dir_in: &Vec3, rec: &HitRecord, dir_out: &Vec3) -> Color {
        let cosine = rec.normal.dot(&dir_out.normalize()).max(0.0);
        self.albedo.value(&rec.tex_coord, &rec.point) * (cosine / PI)
    }
    fn pdf(&self, _dir_in: &Vec3, rec: &HitRecord, dir_out: &Vec3) -> f64 {
        let cosine = rec.normal.dot(&dir_out.normalize());
        (cosine / PI).max(0.0)
    }
}
