use crate::aliases::Vec3;
use crate::material::reflect;
use crate::pdf::cosine::CosineNPdf;
use crate::pdf::Pdf;
use crate::sampler::Sampler;

/// A pdf used for sampling an outgoing direction in Blinn-Phong model.
pub struct BlinnPhongPdf {
    in_ray_dir: Vec3, // normalized
    cosn_pdf: CosineNPdf,
}

impl BlinnPhongPdf {
    /// * `normal` - need not be normalized.
    /// * `in_ray_dir` - need not be normalized.
    pub fn new(exponent: f64, normal: &Vec3, in_ray_dir: &Vec3) -> Self {
        Self {
            in_ray_dir: in_ray_dir.normalize(),
            cosn_pdf: CosineNPdf::new(normal, exponent),
        }
    }
    /// Density of the half vector `half_vec` (normalized).
    pub fn half_vector_density(&self, half_vec: &Vec3) -> f64 {
        self.cosn_pdf.density(half_vec)
    }
}

impl Pdf for BlinnPhongPdf {
    fn density(&self, dir: &Vec3) -> f64 {
        let dir_norm = dir.normalize();
        let half_vec = (-self.in_ray_dir + dir_norm).normalize();
        let cosine = dir_norm.dot(&half_vec);
        if cosine <= 0.0 || !half_vec.norm().is_finite() {
            return 0.0;
        }
        self.cosn_pdf.density(&half_vec) / (4.0 * cosine) // Jacobian
    }
    fn generate(&self, sampler: &mut dyn Sampler) -> Vec3 {
        let half_vec = self.cosn_pdf.generate(sampler);
        reflect(&self.in_ray_dir, &half_vec)
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::Vec3;
    use crate::pdf::blinnphong::BlinnPhongPdf;
    use crate::pdf::tests::integrate_over_sphere;
    use crate::pdf::Pdf;
    use crate::sampler::RandomSampler;

    #[test]
    fn blinn_phong_pdf_density() {
        let ray_in = Vec3::new(-1.0, 0.0, -1.0);
        let pdf = BlinnPhongPdf::new(20.0, &Vec3::new(0.0, 0.0, 1.0), &ray_in);
        let integral = integrate_over_sphere(&pdf, 400_000, 21);
        println!("[blinn_phong_pdf_density] integral: {}", integral);
        assert!((integral - 1.0).abs() < 0.05);
    }

    #[test]
    fn generated_direction_has_positive_density() {
        let ray_in = Vec3::new(0.3, 0.1, -1.0);
        let pdf = BlinnPhongPdf::new(50.0, &Vec3::new(0.0, 0.0, 1.0), &ray_in);
        let mut sampler = RandomSampler::new(1, 22);
        for _ in 0..1000 {
            let d = pdf.generate(&mut sampler);
            assert!(pdf.density(&d) > 0.0);
        }
    }
}
