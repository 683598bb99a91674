use crate::aliases::{Color, Vec3};
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::pdf::blinnphong::BlinnPhongPdf;
use crate::pdf::Pdf;
use crate::sampler::Sampler;
use crate::scatter_record::ScatterRecord;
use crate::texture::constant::ConstantTexture;
use crate::texture::Texture;
use std::sync::Arc;

/// Glossy lobe of half vectors around the normal.
pub struct BlinnPhong {
    albedo: Arc<dyn Texture>,
    exponent: f64,
}

impl BlinnPhong {
    pub fn new(albedo: Arc<dyn Texture>, exponent: f64) -> Self {
        BlinnPhong { albedo, exponent }
    }
    pub fn from_color(albedo: &Color, exponent: f64) -> Self {
        Self::new(ConstantTexture::shared(albedo), exponent)
    }
}

impl Material for BlinnPhong {
    fn sample(
        &self,
        dir_in: &Vec3,
        rec: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterRecord> {
        let pdf = Box::new(BlinnPhongPdf::new(self.exponent, &rec.normal, dir_in));
        Some(ScatterRecord::Sampled {
            direction: pdf.generate(sampler),
            pdf,
        })
    }
    fn eval(&self, dir_in: &Vec3, rec: &HitRecord, dir_out: &Vec3) -> Color {
        if rec.normal.dot(dir_out) <= 0.0 {
            return Color::zeros();
        }
        let v = dir_in.normalize();
        let half_vec = (-v + dir_out.normalize()).normalize();
        let cosine = -v.dot(&half_vec);
        if cosine <= 0.0 || !cosine.is_finite() {
            return Color::zeros();
        }
        let pdf = BlinnPhongPdf::new(self.exponent, &rec.normal, dir_in);
        let brdf = pdf.half_vector_density(&half_vec) / (4.0 * cosine);
        self.albedo.value(&rec.tex_coord, &rec.point) * brdf
    }
    fn pdf(&self, dir_in: &Vec3, rec: &HitRecord, dir_out: &Vec3) -> f64 {
        BlinnPhongPdf::new(self.exponent, &rec.normal, dir_in).density(dir_out)
    }
}

#[cfg(test)]
mod tests {
    use super::BlinnPhong;
    use crate::aliases::{Color, Vec3};
    use crate::material::tests::hit_on_plane;
    use crate::material::Material;
    use crate::sampler::RandomSampler;
    use crate::scatter_record::ScatterRecord;
    use approx::assert_relative_eq;

    #[test]
    fn eval_over_pdf_equals_albedo_above_the_surface() {
        let albedo = Color::new(0.333, 0.983, 0.015);
        let material = BlinnPhong::from_color(&albedo, 100.0);
        let rec = hit_on_plane(&material);
        let dir_in = Vec3::new(1.0, 0.0, -1.0);
        let mut sampler = RandomSampler::new(1, 71);
        for _ in 0..1000 {
            let dir_out = match material.sample(&dir_in, &rec, &mut sampler) {
                Some(ScatterRecord::Sampled { direction, .. }) => direction,
                _ => panic!("blinn-phong always samples a direction"),
            };
            let pdf = material.pdf(&dir_in, &rec, &dir_out);
            if dir_out[2] <= 0.0 || pdf <= 0.0 {
                continue;
            }
            let eval = material.eval(&dir_in, &rec, &dir_out);
            assert_relative_eq!(eval / pdf, albedo, epsilon = 1e-6);
        }
    }
}
