use crate::aliases::Color;
use crate::sampler::Sampler;

/// Bounds for the roulette survival probability.
pub const ROULETTE_EPSILON: f64 = 1e-6;

/// Per-path bookkeeping, passed by value from one vertex to the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecursionState {
    /// Number of bounces taken so far.
    pub depth: u32,
    pub max_depth: u32,
    /// Depth from which Russian roulette may terminate the path.
    pub roulette_start: u32,
    /// Probability with which the path survived the current vertex, in (0, 1].
    pub survival: f64,
    /// Product of the bounce weights along the path.
    pub throughput: Color,
}

impl RecursionState {
    /// `roulette_start` of None disables Russian roulette.
    pub fn new(max_depth: u32, roulette_start: Option<u32>) -> Self {
        RecursionState {
            depth: 0,
            max_depth,
            roulette_start: roulette_start.unwrap_or(u32::MAX),
            survival: 1.0,
            throughput: Color::new(1.0, 1.0, 1.0),
        }
    }
    pub fn is_exhausted(&self) -> bool {
        self.depth >= self.max_depth
    }
    pub fn roulette_active(&self) -> bool {
        self.depth >= self.roulette_start
    }
    pub fn survival_probability(&self) -> f64 {
        if !self.roulette_active() {
            return 1.0;
        }
        let max_channel = self.throughput.max();
        if max_channel.is_nan() {
            return ROULETTE_EPSILON;
        }
        max_channel.max(ROULETTE_EPSILON).min(1.0 - ROULETTE_EPSILON)
    }
    /// Plays Russian roulette at this vertex.
    /// Returns the state carrying its survival probability, or None if the path ends here.
    pub fn play_roulette(self, sampler: &mut dyn Sampler) -> Option<Self> {
        let survival = self.survival_probability();
        if survival < 1.0 && sampler.sample_1d() >= survival {
            return None;
        }
        Some(RecursionState { survival, ..self })
    }
    /// State at the next vertex after a bounce of weight `factor`.
    pub fn next(&self, factor: &Color) -> Self {
        RecursionState {
            depth: self.depth + 1,
            survival: 1.0,
            throughput: self.throughput.component_mul(factor) / self.survival,
            ..*self
        }
    }
}
