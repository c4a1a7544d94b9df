// src/maze/cell.rs

use serde::{Deserialize, Serialize};

/// One of the four sides of a cell.
///
/// `Top` points towards `y - 1` and `Left` towards `x - 1`, matching the
/// column/row indexing of [`MazeGrid`](crate::maze::MazeGrid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub fn all() -> &'static [Direction] {
        &[
            Direction::Top,
            Direction::Bottom,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// The side of the neighbouring cell that faces this one.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Steps one cell from `(x, y)`. Returns `None` when the step would
    /// leave the non-negative quadrant; the upper bound is the caller's job.
    pub fn step(self, x: usize, y: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Top => Some((x, y.checked_sub(1)?)),
            Direction::Bottom => Some((x, y + 1)),
            Direction::Left => Some((x.checked_sub(1)?, y)),
            Direction::Right => Some((x + 1, y)),
        }
    }
}

/// A single maze cell: four walls and the carving flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeCell {
    pub visited: bool,
    pub wall_top: bool,
    pub wall_bottom: bool,
    pub wall_left: bool,
    pub wall_right: bool,
}

impl Default for MazeCell {
    fn default() -> Self {
        MazeCell {
            visited: false,
            wall_top: true,
            wall_bottom: true,
            wall_left: true,
            wall_right: true,
        }
    }
}

impl MazeCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.wall_top,
            Direction::Bottom => self.wall_bottom,
            Direction::Left => self.wall_left,
            Direction::Right => self.wall_right,
        }
    }

    /// Only one side of a shared wall. Callers that knock a wall down go
    /// through the grid or a section view so the neighbour is updated too.
    pub(crate) fn set_wall(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::Top => self.wall_top = present,
            Direction::Bottom => self.wall_bottom = present,
            Direction::Left => self.wall_left = present,
            Direction::Right => self.wall_right = present,
        }
    }

    /// Number of sides without a wall.
    pub fn open_sides(&self) -> usize {
        Direction::all()
            .iter()
            .filter(|dir| !self.has_wall(**dir))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_closed_and_unvisited() {
        let cell = MazeCell::new();
        assert!(!cell.visited);
        for dir in Direction::all() {
            assert!(cell.has_wall(*dir));
        }
        assert_eq!(cell.open_sides(), 0);
    }

    #[test]
    fn test_set_wall_touches_one_side() {
        let mut cell = MazeCell::new();
        cell.set_wall(Direction::Right, false);
        assert!(!cell.has_wall(Direction::Right));
        assert!(cell.has_wall(Direction::Left));
        assert_eq!(cell.open_sides(), 1);
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::all() {
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(dir.opposite().opposite(), *dir);
        }
    }

    #[test]
    fn test_step_underflow() {
        assert_eq!(Direction::Top.step(3, 0), None);
        assert_eq!(Direction::Left.step(0, 3), None);
        assert_eq!(Direction::Bottom.step(3, 0), Some((3, 1)));
        assert_eq!(Direction::Right.step(0, 3), Some((1, 3)));
    }
}
