pub mod aliases;
pub mod background;
pub mod camera;
pub mod error;
pub mod hit_record;
pub mod hitable;
pub mod integrator;
pub mod material;
pub mod onb;
pub mod pdf;
pub mod ray;
pub mod renderer;
pub mod sampler;
pub mod scatter_record;
pub mod scene;
pub mod texture;
