use crate::aliases::Vec3;
use crate::onb::Onb;
use crate::pdf::{random_cosine_direction, random_in_lobe, Pdf};
use crate::sampler::Sampler;
use std::f64::consts::PI;

/// Pdf such that pdf(d)/sin(t) ~= max(cos(t), 0) in a specified local coordinate (u,v,w)
pub struct CosinePdf(Onb);

impl CosinePdf {
    pub fn new(w: &Vec3) -> Self {
        CosinePdf(Onb::build_from_w(w))
    }
    pub fn boxed(w: &Vec3) -> Box<Self> {
        Box::new(Self::new(w))
    }
}

impl Pdf for CosinePdf {
    fn density(&self, dir: &Vec3) -> f64 {
        let cosine = dir.normalize().dot(self.0.w());
        (cosine / PI).max(0.0) // since integral of cos(theta) on a unit hemisphere = pi.
    }
    fn generate(&self, sampler: &mut dyn Sampler) -> Vec3 {
        self.0.local_to_global_vec(&random_cosine_direction(sampler))
    }
}

/// Pdf proportional to max(cos(t), 0)^n around w, i.e. (n+1) cos^n(t) / 2PI.
pub struct CosineNPdf {
    pub basis: Onb,
    exponent: f64,
}

impl CosineNPdf {
    pub fn new(w: &Vec3, exponent: f64) -> Self {
        CosineNPdf {
            basis: Onb::build_from_w(w),
            exponent,
        }
    }
    /// Density as a function of the cosine to the lobe axis.
    pub fn density_from_cosine(exponent: f64, cosine: f64) -> f64 {
        if cosine <= 0.0 {
            0.0
        } else {
            (exponent + 1.0) * cosine.powf(exponent) / (2.0 * PI)
        }
    }
}

impl Pdf for CosineNPdf {
    fn density(&self, dir: &Vec3) -> f64 {
        let cosine = dir.normalize().dot(self.basis.w());
        Self::density_from_cosine(self.exponent, cosine)
    }
    fn generate(&self, sampler: &mut dyn Sampler) -> Vec3 {
        self.basis
            .local_to_global_vec(&random_in_lobe(self.exponent, sampler))
    }
}

#[cfg(test)]
mod tests {
    use super::{CosineNPdf, CosinePdf};
    use crate::aliases::Vec3;
    use crate::pdf::tests::integrate_over_sphere;
    use crate::pdf::Pdf;
    use crate::sampler::RandomSampler;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn cosine_pdf_density_formula() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        let pdf = CosinePdf::new(&n);
        assert_relative_eq!(pdf.density(&n), 1.0 / PI, epsilon = 1e-12);
        let d = Vec3::new(1.0, 1.0, 0.0);
        assert_relative_eq!(pdf.density(&d), (0.5f64).sqrt() / PI, epsilon = 1e-12);
        assert_eq!(pdf.density(&Vec3::new(0.0, -1.0, 0.3)), 0.0);
    }

    #[test]
    fn cosine_pdf_integrates_to_one() {
        let pdf = CosinePdf::new(&Vec3::new(0.3, -0.2, 0.9));
        let integral = integrate_over_sphere(&pdf, 200_000, 11);
        assert!((integral - 1.0).abs() < 0.02, "integral: {}", integral);
    }

    #[test]
    fn cosine_pdf_generates_inside_support() {
        let w = Vec3::new(-1.0, 2.0, 0.5);
        let pdf = CosinePdf::new(&w);
        let mut sampler = RandomSampler::new(1, 12);
        for _ in 0..1000 {
            let d = pdf.generate(&mut sampler);
            assert!(d.dot(&w) >= 0.0);
            assert!(pdf.density(&d) >= 0.0);
        }
    }

    #[test]
    fn lobe_pdf_integrates_to_one() {
        for exponent in &[1.0, 10.0] {
            let pdf = CosineNPdf::new(&Vec3::new(0.0, 0.0, 1.0), *exponent);
            let integral = integrate_over_sphere(&pdf, 400_000, 13);
            assert!((integral - 1.0).abs() < 0.03, "integral: {}", integral);
        }
    }

    #[test]
    fn lobe_pdf_samples_concentrate_on_axis() {
        let axis = Vec3::new(1.0, 1.0, 0.0).normalize();
        let pdf = CosineNPdf::new(&axis, 100.0);
        let mut sampler = RandomSampler::new(1, 14);
        let mut mean_cos = 0.0;
        const N: usize = 10000;
        for _ in 0..N {
            let d = pdf.generate(&mut sampler);
            mean_cos += d.normalize().dot(&axis);
        }
        // E[cos] = (n+1)/(n+2)
        assert!((mean_cos / N as f64 - 101.0 / 102.0).abs() < 1e-3);
    }
}
