// src/generator/error.rs

use thiserror::Error;

/// Everything that can stop a maze from being generated.
///
/// All variants are raised before any section task is scheduled, so a
/// failed call leaves the generator exactly as it was.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("section size must be positive")]
    InvalidSectionSize,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to read generator config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("invalid generator config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
