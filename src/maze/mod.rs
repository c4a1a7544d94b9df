// src/maze/mod.rs
pub mod analysis;
pub mod cell;
pub mod grid;
pub mod merge;
pub mod section;

pub use cell::{Direction, MazeCell};
pub use grid::MazeGrid;
pub use merge::merge_section_borders;
pub use section::{carve_section, SectionBounds, SectionLayout, SectionView};
