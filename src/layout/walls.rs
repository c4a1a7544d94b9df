// src/layout/walls.rs
// Turns a finished grid into wall placements for whatever draws the maze.

use log::{info, warn};
use serde::Serialize;

use crate::maze::{Direction, MazeGrid};
use crate::utils::geometry::Point2D;

/// One standing wall, centred on the edge it closes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallSegment {
    pub cell_x: usize,
    pub cell_y: usize,
    pub side: Direction,
    pub position: Point2D,
    /// 0 for walls running along x (top/bottom), 90 for walls along y.
    pub yaw_degrees: f64,
}

/// Places every closed wall of `grid` on a plane where each cell is a
/// `cell_size` square with cell `(0, 0)` at the origin.
///
/// Shared walls are emitted once: top walls only on the first row and left
/// walls only on the first column, everything else from the bottom/right
/// side of its cell.
///
/// A non-positive or non-finite `cell_size` leaves nothing to place; that is
/// logged and an empty layout returned.
pub fn wall_segments(grid: &MazeGrid, cell_size: f64) -> Vec<WallSegment> {
    if !cell_size.is_finite() || cell_size <= 0.0 {
        warn!("Invalid cell size {} for wall layout, skipping", cell_size);
        return Vec::new();
    }

    let half = cell_size / 2.0;
    let mut segments = Vec::new();

    for (x, y, cell) in grid.iter() {
        let origin_x = x as f64 * cell_size;
        let origin_y = y as f64 * cell_size;
        let mut place = |side: Direction, px: f64, py: f64, yaw_degrees: f64| {
            segments.push(WallSegment {
                cell_x: x,
                cell_y: y,
                side,
                position: Point2D::new(px, py),
                yaw_degrees,
            });
        };

        if y == 0 && cell.wall_top {
            place(Direction::Top, origin_x + half, origin_y, 0.0);
        }
        if cell.wall_bottom {
            place(Direction::Bottom, origin_x + half, origin_y + cell_size, 0.0);
        }
        if x == 0 && cell.wall_left {
            place(Direction::Left, origin_x, origin_y + half, 90.0);
        }
        if cell.wall_right {
            place(Direction::Right, origin_x + cell_size, origin_y + half, 90.0);
        }
    }

    info!("Maze layout complete: {} wall segments", segments.len());
    segments
}
