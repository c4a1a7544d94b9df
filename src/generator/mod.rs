// src/generator/mod.rs
mod config;
mod error;
mod maze_generator;

pub use config::GeneratorConfig;
pub use error::MazeError;
pub use maze_generator::{GenerationStats, MazeGenerator};
