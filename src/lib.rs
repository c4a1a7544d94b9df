// src/lib.rs
//! # sectored_maze
//!
//! Cuts a rectangular grid into square sections, carves a depth-first
//! spanning tree in every section concurrently on a rayon pool, then knocks
//! one random wall out of every section border so the whole grid is a single
//! connected maze.
//!
//! ```
//! use sectored_maze::generator::MazeGenerator;
//! use sectored_maze::maze::analysis::is_fully_connected;
//!
//! let mut generator = MazeGenerator::default();
//! let grid = generator.generate_maze(10, 10, 5, false).unwrap();
//! assert!(is_fully_connected(grid));
//! ```

pub mod generator;
pub mod layout;
pub mod maze;
pub mod utils;
