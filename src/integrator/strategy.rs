use crate::aliases::{Color, Vec3};
use crate::error::ConfigError;
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::integrator::ris::{cumulative_weights, resample_index};
use crate::integrator::{balance_heuristic, guarded_division, luminance};
use crate::pdf::hitable::HitablePdf;
use crate::pdf::Pdf;
use crate::sampler::Sampler;
use crate::scatter_record::ScatterRecord;
use crate::scene::Scene;

/// Probability with which multiple importance sampling draws from the lights.
pub const LIGHT_SELECTION_PROBABILITY: f64 = 0.5;

/// How the next direction is chosen at a non-specular vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// The material's own distribution.
    Material,
    /// The light-object distribution of `Scene::lights`.
    Light,
    /// One sample from either the lights or the material, balance heuristic.
    Mis,
    /// `resample_count` picks from `pool_size` material candidates, weighted
    /// by the luminance of the material response.
    Ris {
        pool_size: usize,
        resample_count: usize,
    },
}

/// A direction to continue the path in and its weight: eval / density,
/// including any strategy weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounce {
    pub direction: Vec3,
    pub factor: Color,
}

impl Strategy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Strategy::Ris { pool_size: 0, .. } => Err(ConfigError::ZeroPoolSize),
            Strategy::Ris {
                resample_count: 0, ..
            } => Err(ConfigError::ZeroResampleCount),
            _ => Ok(()),
        }
    }
    /// The strategy used at a vertex `depth` bounces into the path.
    /// RIS branches into all its picks at the camera vertex only and keeps a
    /// single pick deeper, so the work per path stays linear in the depth.
    pub fn at_depth(&self, depth: u32) -> Strategy {
        match *self {
            Strategy::Ris { pool_size, .. } if depth > 0 => Strategy::Ris {
                pool_size,
                resample_count: 1,
            },
            strategy => strategy,
        }
    }
    pub fn uses_lights(&self) -> bool {
        match self {
            Strategy::Light | Strategy::Mis => true,
            Strategy::Material | Strategy::Ris { .. } => false,
        }
    }
    /// Bounces out of a non-specular vertex. An empty result means the path ends.
    pub fn bounces(
        &self,
        dir_in: &Vec3,
        rec: &HitRecord,
        srec: &ScatterRecord,
        scene: &Scene,
        sampler: &mut dyn Sampler,
    ) -> Vec<Bounce> {
        let (direction, pdf) = match srec {
            ScatterRecord::Sampled { direction, pdf } => (direction, pdf.as_ref()),
            ScatterRecord::Specular { .. } => return vec![],
        };
        let lights = scene.lights.as_ref();
        match (*self, lights) {
            (Strategy::Light, Some(lights)) => {
                light_bounce(dir_in, rec, lights.as_ref(), sampler).into_iter().collect()
            }
            (Strategy::Mis, Some(lights)) => {
                mis_bounce(dir_in, rec, direction, lights.as_ref(), sampler)
                    .into_iter()
                    .collect()
            }
            (
                Strategy::Ris {
                    pool_size,
                    resample_count,
                },
                _,
            ) => ris_bounces(dir_in, rec, direction, pdf, pool_size, resample_count, sampler),
            // light strategies without lights fall back to the material
            _ => material_bounce(dir_in, rec, srec).into_iter().collect(),
        }
    }
}

fn material_bounce(dir_in: &Vec3, rec: &HitRecord, srec: &ScatterRecord) -> Option<Bounce> {
    let direction = match srec {
        ScatterRecord::Sampled { direction, .. } => *direction,
        ScatterRecord::Specular { .. } => return None,
    };
    let density = rec.material.scatter_pdf(dir_in, rec, srec);
    let eval = rec.material.eval(dir_in, rec, &direction);
    guarded_division(&eval, density).map(|factor| Bounce { direction, factor })
}

fn light_bounce(
    dir_in: &Vec3,
    rec: &HitRecord,
    lights: &dyn Hitable,
    sampler: &mut dyn Sampler,
) -> Option<Bounce> {
    let light_pdf = HitablePdf::new(lights, &rec.point);
    let direction = light_pdf.generate(sampler);
    let density = light_pdf.density(&direction);
    let eval = rec.material.eval(dir_in, rec, &direction);
    guarded_division(&eval, density).map(|factor| Bounce { direction, factor })
}

fn mis_bounce(
    dir_in: &Vec3,
    rec: &HitRecord,
    material_direction: &Vec3,
    lights: &dyn Hitable,
    sampler: &mut dyn Sampler,
) -> Option<Bounce> {
    let light_pdf = HitablePdf::new(lights, &rec.point);
    let from_light = sampler.sample_1d() < LIGHT_SELECTION_PROBABILITY;
    let direction = if from_light {
        light_pdf.generate(sampler)
    } else {
        *material_direction
    };
    let pdf_light = light_pdf.density(&direction);
    let pdf_material = rec.material.pdf(dir_in, rec, &direction);
    let (pdf_chosen, pdf_other, selection) = if from_light {
        (pdf_light, pdf_material, LIGHT_SELECTION_PROBABILITY)
    } else {
        (pdf_material, pdf_light, 1.0 - LIGHT_SELECTION_PROBABILITY)
    };
    let weight = balance_heuristic(pdf_chosen, pdf_other);
    let eval = rec.material.eval(dir_in, rec, &direction);
    guarded_division(&(weight * eval), selection * pdf_chosen)
        .map(|factor| Bounce { direction, factor })
}

struct Candidate {
    direction: Vec3,
    eval: Color,
    target: f64,
}

fn ris_bounces(
    dir_in: &Vec3,
    rec: &HitRecord,
    first_direction: &Vec3,
    pdf: &dyn Pdf,
    pool_size: usize,
    resample_count: usize,
    sampler: &mut dyn Sampler,
) -> Vec<Bounce> {
    if pool_size == 0 || resample_count == 0 {
        return vec![];
    }
    let mut candidates = Vec::with_capacity(pool_size);
    let mut weights = Vec::with_capacity(pool_size);
    for i in 0..pool_size {
        let direction = if i == 0 {
            *first_direction
        } else {
            pdf.generate(sampler)
        };
        let density = pdf.density(&direction);
        let eval = rec.material.eval(dir_in, rec, &direction);
        let target = luminance(&eval);
        let weight = if density > 0.0 && density.is_finite() && target > 0.0 {
            target / density
        } else {
            0.0
        };
        weights.push(if weight.is_finite() { weight } else { 0.0 });
        candidates.push(Candidate {
            direction,
            eval,
            target,
        });
    }
    let cumulative = cumulative_weights(&weights);
    let total = match cumulative.last() {
        Some(total) => *total,
        None => return vec![],
    };
    let mean_weight = total / pool_size as f64;
    let mut ret = Vec::with_capacity(resample_count);
    for _ in 0..resample_count {
        let idx = match resample_index(&cumulative, sampler.sample_1d()) {
            Some(idx) => idx,
            None => break,
        };
        let chosen = &candidates[idx];
        if let Some(factor) = guarded_division(
            &(mean_weight * chosen.eval),
            chosen.target * resample_count as f64,
        ) {
            ret.push(Bounce {
                direction: chosen.direction,
                factor,
            });
        }
    }
    ret
}
