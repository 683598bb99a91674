pub mod ambient_occlusion;
pub mod normal;
pub mod path;
pub mod ris;
pub mod state;
pub mod strategy;

pub use self::ambient_occlusion::AmbientOcclusion;
pub use self::normal::NormalIntegrator;
pub use self::path::PathTracer;
pub use self::state::RecursionState;
pub use self::strategy::Strategy;

use crate::aliases::Color;
use crate::ray::Ray;
use crate::sampler::Sampler;
use crate::scene::Scene;

/// Recursion never goes deeper than this, whatever the configured max depth.
pub const MAX_RECURSION_DEPTH: u32 = 100;

/// Estimates the radiance arriving along a ray.
pub trait Integrator: Send + Sync {
    /// Radiance arriving at `ray.origin` from `ray.direction`.
    fn li(
        &self,
        ray: &Ray,
        scene: &Scene,
        sampler: &mut dyn Sampler,
        state: RecursionState,
    ) -> Color;
    /// State of the first vertex of a camera path.
    fn initial_state(&self) -> RecursionState {
        RecursionState::new(0, None)
    }
    /// Whether the estimator samples `Scene::lights`.
    fn needs_lights(&self) -> bool {
        false
    }
    /// Radiance along a camera ray, the path starting from `initial_state()`.
    fn radiance(&self, ray: &Ray, scene: &Scene, sampler: &mut dyn Sampler) -> Color {
        self.li(ray, scene, sampler, self.initial_state())
    }
}

/// Relative luminance with Rec. 709 weights.
pub fn luminance(color: &Color) -> f64 {
    0.2126 * color[0] + 0.7152 * color[1] + 0.0722 * color[2]
}

/// Balance heuristic weight of a sample drawn by the strategy with density `pdf_chosen`.
pub fn balance_heuristic(pdf_chosen: f64, pdf_other: f64) -> f64 {
    let sum = pdf_chosen + pdf_other;
    if sum > 0.0 && sum.is_finite() {
        pdf_chosen / sum
    } else {
        0.0
    }
}

/// `numerator / density`, or None when the density gives no usable estimate.
pub fn guarded_division(numerator: &Color, density: f64) -> Option<Color> {
    if !(density > 0.0 && density.is_finite()) {
        return None;
    }
    let ret = numerator / density;
    if ret.iter().all(|c| c.is_finite()) {
        Some(ret)
    } else {
        None
    }
}
