use thiserror::Error;

/// Rejected integrator or renderer parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("samples per pixel must be positive")]
    ZeroSamples,

    #[error("image resolution must be positive, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    #[error("RIS candidate pool must not be empty")]
    ZeroPoolSize,

    #[error("RIS resample count must be positive")]
    ZeroResampleCount,

    #[error("max depth {max_depth} exceeds the recursion limit {limit}")]
    DepthTooLarge { max_depth: u32, limit: u32 },

    #[error("worker thread count must be positive")]
    ZeroThreads,
}
