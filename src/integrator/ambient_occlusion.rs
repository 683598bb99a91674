use crate::aliases::Color;
use crate::integrator::state::RecursionState;
use crate::integrator::Integrator;
use crate::pdf::cosine::CosinePdf;
use crate::pdf::Pdf;
use crate::ray::Ray;
use crate::sampler::Sampler;
use crate::scene::Scene;

/// Casts one cosine-distributed ray from the first hit.
/// Returns `visibility` if it escapes the scene, black if it is blocked.
pub struct AmbientOcclusion {
    visibility: Color,
}

impl AmbientOcclusion {
    pub fn new(visibility: &Color) -> Self {
        AmbientOcclusion {
            visibility: *visibility,
        }
    }
}

impl Default for AmbientOcclusion {
    fn default() -> Self {
        AmbientOcclusion::new(&Color::new(1.0, 1.0, 1.0))
    }
}

impl Integrator for AmbientOcclusion {
    fn li(
        &self,
        ray: &Ray,
        scene: &Scene,
        sampler: &mut dyn Sampler,
        _state: RecursionState,
    ) -> Color {
        let rec = match scene.hit(ray) {
            Some(rec) => rec,
            None => return scene.background(ray),
        };
        let dir = CosinePdf::new(&rec.normal).generate(sampler);
        match scene.hit(&Ray::new(&rec.point, &dir)) {
            Some(_) => Color::zeros(),
            None => self.visibility,
        }
    }
}
