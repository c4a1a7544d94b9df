// src/layout/mod.rs
mod walls;

pub use walls::{wall_segments, WallSegment};
