use crate::aliases::Color;
use crate::integrator::state::RecursionState;
use crate::integrator::Integrator;
use crate::ray::Ray;
use crate::sampler::Sampler;
use crate::scene::Scene;

/// Shows the absolute shading normal of the first hit. Black on a miss.
pub struct NormalIntegrator;

impl Integrator for NormalIntegrator {
    fn li(
        &self,
        ray: &Ray,
        scene: &Scene,
        _sampler: &mut dyn Sampler,
        _state: RecursionState,
    ) -> Color {
        match scene.hit(ray) {
            Some(rec) => rec.normal.abs(),
            None => Color::zeros(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NormalIntegrator;
    use crate::aliases::{Color, Vec3};
    use crate::hitable::sphere::Sphere;
    use crate::integrator::Integrator;
    use crate::material::lambertian::Lambertian;
    use crate::ray::Ray;
    use crate::sampler::RandomSampler;
    use crate::scene::Scene;
    use approx::assert_relative_eq;
    use std::sync::Arc;

    #[test]
    fn normal_of_first_hit() {
        let scene = Scene::new(Arc::new(Sphere::new(
            &Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Arc::new(Lambertian::from_color(&Color::new(0.5, 0.5, 0.5))),
        )));
        let mut sampler = RandomSampler::new(1, 0);
        let hit = Ray::new(&Vec3::zeros(), &Vec3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(
            NormalIntegrator.radiance(&hit, &scene, &mut sampler),
            Color::new(0.0, 0.0, 1.0),
            epsilon = 1e-9
        );
        let miss = Ray::new(&Vec3::zeros(), &Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(NormalIntegrator.radiance(&miss, &scene, &mut sampler), Color::zeros());
    }
}
