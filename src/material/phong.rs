use crate::aliases::{Color, Vec3};
use crate::hit_record::HitRecord;
use crate::material::{reflect, Material};
use crate::pdf::cosine::CosineNPdf;
use crate::pdf::Pdf;
use crate::sampler::Sampler;
use crate::scatter_record::ScatterRecord;
use crate::texture::constant::ConstantTexture;
use crate::texture::Texture;
use std::sync::Arc;

/// Glossy lobe around the mirror direction.
///
/// eval = albedo (n+1)/2PI cos^n(a), a being the angle to the mirror
/// direction, which is exactly albedo times the density of the lobe the
/// material samples from.
pub struct Phong {
    albedo: Arc<dyn Texture>,
    exponent: f64,
}

impl Phong {
    pub fn new(albedo: Arc<dyn Texture>, exponent: f64) -> Self {
        Phong { albedo, exponent }
    }
    pub fn from_color(albedo: &Color, exponent: f64) -> Self {
        Self::new(ConstantTexture::shared(albedo), exponent)
    }
    fn lobe(&self, dir_in: &Vec3, rec: &HitRecord) -> CosineNPdf {
        CosineNPdf::new(&reflect(&dir_in.normalize(), &rec.normal), self.exponent)
    }
}

impl Material for Phong {
    fn sample(
        &self,
        dir_in: &Vec3,
        rec: &HitRecord,
        sampler: &mut dyn Sampler,
    ) -> Option<ScatterRecord> {
        let pdf = Box::new(self.lobe(dir_in, rec));
        Some(ScatterRecord::Sampled {
            direction: pdf.generate(sampler),
            pdf,
        })
    }
    fn eval(&self, dir_in: &Vec3, rec: &HitRecord, dir_out: &Vec3) -> Color {
        if rec.normal.dot(dir_out) <= 0.0 {
            return Color::zeros();
        }
        self.albedo.value(&rec.tex_coord, &rec.point) * self.lobe(dir_in, rec).density(dir_out)
    }
    fn pdf(&self, dir_in: &Vec3, rec: &HitRecord, dir_out: &Vec3) -> f64 {
        self.lobe(dir_in, rec).density(dir_out)
    }
}

#[cfg(test)]
mod tests {
    use super::Phong;
    use crate::aliases::{Color, Vec3};
    use crate::material::reflect;
    use crate::material::tests::hit_on_plane;
    use crate::material::Material;
    use crate::sampler::RandomSampler;
    use crate::scatter_record::ScatterRecord;
    use approx::assert_relative_eq;

    #[test]
    fn eval_over_pdf_equals_albedo_above_the_surface() {
        let albedo = Color::new(0.75, 0.25, 0.25);
        let phong = Phong::from_color(&albedo, 50.0);
        let rec = hit_on_plane(&phong);
        let dir_in = Vec3::new(1.0, 0.0, -1.0);
        let mut sampler = RandomSampler::new(1, 61);
        for _ in 0..1000 {
            let dir_out = match phong.sample(&dir_in, &rec, &mut sampler) {
                Some(ScatterRecord::Sampled { direction, .. }) => direction,
                _ => panic!("phong always samples a direction"),
            };
            let pdf = phong.pdf(&dir_in, &rec, &dir_out);
            assert!(pdf > 0.0);
            let eval = phong.eval(&dir_in, &rec, &dir_out);
            if dir_out[2] > 0.0 {
                assert_relative_eq!(eval / pdf, albedo, epsilon = 1e-9);
            } else {
                assert_eq!(eval, Color::zeros());
            }
        }
    }

    #[test]
    fn peak_is_at_the_mirror_direction() {
        let phong = Phong::from_color(&Color::new(1.0, 1.0, 1.0), 20.0);
        let rec = hit_on_plane(&phong);
        let dir_in = Vec3::new(1.0, 0.0, -1.0);
        let mirror = reflect(&dir_in.normalize(), &rec.normal);
        let off = Vec3::new(0.2, 0.0, 1.0);
        assert!(phong.pdf(&dir_in, &rec, &mirror) > phong.pdf(&dir_in, &rec, &off));
        assert_relative_eq!(phong.pdf(&dir_in, &rec, &mirror), 21.0 / (2.0 * std::f64::consts::PI), epsilon = 1e-9);
    }
}
