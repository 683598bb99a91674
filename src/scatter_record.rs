use crate::aliases::Vec3;
use crate::pdf::Pdf;
use crate::ray::Ray;

/// Informations to calculate the scattered ray.
pub enum ScatterRecord {
    /// A delta distribution: the ray is fully determined, there is no density.
    Specular { ray: Ray },
    /// A direction drawn from `pdf`.
    Sampled { direction: Vec3, pdf: Box<dyn Pdf> },
}
