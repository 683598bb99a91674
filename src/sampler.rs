use crate::aliases::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random variates in [0, 1).
///
/// Each worker owns its own sampler. Use `fork` to obtain an independent
/// stream for another thread instead of sharing one generator.
pub trait Sampler: Send {
    /// An equivalently configured sampler drawing from an independent stream.
    fn fork(&mut self) -> Box<dyn Sampler>;
    /// Restarts the stream deterministically for pixel (x, y).
    fn seed(&mut self, x: u32, y: u32);
    fn start_pixel(&mut self, x: u32, y: u32) {
        self.seed(x, y);
    }
    /// Moves on to the next sample of the current pixel.
    fn advance(&mut self);
    fn sample_1d(&mut self) -> f64;
    fn sample_2d(&mut self) -> Vec2;
    fn sample_3d(&mut self) -> Vec3;
    fn sample_count(&self) -> usize;
    fn current_sample(&self) -> usize;
    fn current_dim(&self) -> usize;
}

/// Independent uniform samples from `StdRng`.
pub struct RandomSampler {
    rng: StdRng,
    base_seed: u64,
    num_samples: usize,
    cur_sample: usize,
    cur_dim: usize,
}

impl RandomSampler {
    pub fn new(num_samples: usize, base_seed: u64) -> Self {
        RandomSampler {
            rng: StdRng::seed_from_u64(base_seed),
            base_seed,
            num_samples,
            cur_sample: 0,
            cur_dim: 0,
        }
    }
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }
}

// splitmix64 finalizer, so that neighbouring pixels get unrelated seeds.
fn mix_seed(base: u64, x: u32, y: u32) -> u64 {
    let mut z = base ^ (((x as u64) << 32) | y as u64);
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl Sampler for RandomSampler {
    fn fork(&mut self) -> Box<dyn Sampler> {
        Box::new(RandomSampler {
            rng: StdRng::seed_from_u64(self.rng.gen::<u64>()),
            base_seed: self.base_seed,
            num_samples: self.num_samples,
            cur_sample: self.cur_sample,
            cur_dim: self.cur_dim,
        })
    }
    fn seed(&mut self, x: u32, y: u32) {
        self.cur_sample = 0;
        self.cur_dim = 0;
        self.rng = StdRng::seed_from_u64(mix_seed(self.base_seed, x, y));
    }
    fn advance(&mut self) {
        self.cur_dim = 0;
        self.cur_sample += 1;
    }
    fn sample_1d(&mut self) -> f64 {
        self.cur_dim += 1;
        self.rng.gen::<f64>()
    }
    fn sample_2d(&mut self) -> Vec2 {
        self.cur_dim += 2;
        Vec2::new(self.rng.gen::<f64>(), self.rng.gen::<f64>())
    }
    fn sample_3d(&mut self) -> Vec3 {
        self.cur_dim += 3;
        Vec3::new(
            self.rng.gen::<f64>(),
            self.rng.gen::<f64>(),
            self.rng.gen::<f64>(),
        )
    }
    fn sample_count(&self) -> usize {
        self.num_samples
    }
    fn current_sample(&self) -> usize {
        self.cur_sample
    }
    fn current_dim(&self) -> usize {
        self.cur_dim
    }
}
