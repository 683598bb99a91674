use crate::aliases::Color;
use crate::error::ConfigError;
use crate::integrator::state::RecursionState;
use crate::integrator::strategy::Strategy;
use crate::integrator::{Integrator, MAX_RECURSION_DEPTH};
use crate::ray::Ray;
use crate::sampler::Sampler;
use crate::scatter_record::ScatterRecord;
use crate::scene::Scene;

/// Recursive Monte Carlo path tracer.
///
/// At each vertex the emitted light is added, then the path continues through
/// the material: specular events follow their single ray, other events the
/// bounces chosen by `strategy`. Paths stop at `max_depth` bounces, and with
/// Russian roulette enabled may stop earlier without bias.
pub struct PathTracer {
    strategy: Strategy,
    max_depth: u32,
    roulette_start: Option<u32>,
}

impl PathTracer {
    pub fn new(strategy: Strategy, max_depth: u32) -> Result<Self, ConfigError> {
        if max_depth > MAX_RECURSION_DEPTH {
            return Err(ConfigError::DepthTooLarge {
                max_depth,
                limit: MAX_RECURSION_DEPTH,
            });
        }
        strategy.validate()?;
        Ok(PathTracer {
            strategy,
            max_depth,
            roulette_start: None,
        })
    }
    /// Enables Russian roulette from depth `start` on. Any start is valid:
    /// 0 plays roulette from the camera vertex, a start beyond `max_depth`
    /// never plays it.
    pub fn with_roulette(mut self, start: u32) -> Self {
        self.roulette_start = Some(start);
        self
    }
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
    pub fn roulette_start(&self) -> Option<u32> {
        self.roulette_start
    }
}

impl Integrator for PathTracer {
    fn li(
        &self,
        ray: &Ray,
        scene: &Scene,
        sampler: &mut dyn Sampler,
        state: RecursionState,
    ) -> Color {
        let rec = match scene.hit(ray) {
            Some(rec) => rec,
            None => return scene.background(ray),
        };
        let emitted = rec
            .material
            .emitted(ray, &rec, rec.u(), rec.v(), &rec.point);
        if state.is_exhausted() {
            return emitted;
        }
        let state = match state.play_roulette(sampler) {
            Some(state) => state,
            None => return emitted,
        };
        let srec = match rec.material.sample(&ray.direction, &rec, sampler) {
            Some(srec) => srec,
            None => return emitted,
        };
        match srec {
            ScatterRecord::Specular { ray: ref out_ray } => {
                let attenuation = rec.material.eval(&ray.direction, &rec, &out_ray.direction);
                let incoming = self.li(out_ray, scene, sampler, state.next(&attenuation));
                emitted + attenuation.component_mul(&incoming) / state.survival
            }
            ScatterRecord::Sampled { .. } => self
                .strategy
                .at_depth(state.depth)
                .bounces(&ray.direction, &rec, &srec, scene, sampler)
                .iter()
                .fold(emitted, |acc, bounce| {
                    let out_ray = Ray::new(&rec.point, &bounce.direction);
                    let incoming = self.li(&out_ray, scene, sampler, state.next(&bounce.factor));
                    acc + bounce.factor.component_mul(&incoming) / state.survival
                }),
        }
    }
    fn initial_state(&self) -> RecursionState {
        RecursionState::new(self.max_depth, self.roulette_start)
    }
    fn needs_lights(&self) -> bool {
        self.strategy.uses_lights()
    }
}
