// src/maze/analysis.rs
// Read-only checks over a finished (or partially carved) grid.

use std::collections::VecDeque;

use crate::maze::{Direction, MazeGrid, SectionBounds};

/// Number of cells reachable from `(x, y)` through open passages.
/// Returns 0 when the start lies outside the grid.
pub fn reachable_from(grid: &MazeGrid, x: usize, y: usize) -> usize {
    flood_fill(grid, (x, y), |_, _| true)
}

/// True when every cell can be reached from `(0, 0)`.
pub fn is_fully_connected(grid: &MazeGrid) -> bool {
    grid.cell_count() == 0 || reachable_from(grid, 0, 0) == grid.cell_count()
}

/// Number of open walls between adjacent cells, each pair counted once.
pub fn open_passage_count(grid: &MazeGrid) -> usize {
    grid.iter()
        .map(|(x, y, _)| {
            usize::from(grid.is_open(x, y, Direction::Right))
                + usize::from(grid.is_open(x, y, Direction::Bottom))
        })
        .sum()
}

/// Every adjacent pair whose shared wall is open on one side only, reported
/// as the cell and the side it sees open. Empty for a well-formed grid.
pub fn asymmetric_walls(grid: &MazeGrid) -> Vec<((usize, usize), Direction)> {
    let mut broken = Vec::new();
    for (x, y, cell) in grid.iter() {
        for &dir in Direction::all() {
            if let Some((nx, ny)) = grid.neighbour(x, y, dir) {
                if cell.has_wall(dir) != grid.cell(nx, ny).has_wall(dir.opposite()) {
                    broken.push(((x, y), dir));
                }
            }
        }
    }
    broken
}

/// Walls on the outer boundary that are missing. Generation never opens these.
pub fn open_boundary_walls(grid: &MazeGrid) -> usize {
    grid.iter()
        .map(|(x, y, cell)| {
            Direction::all()
                .iter()
                .filter(|&&dir| grid.neighbour(x, y, dir).is_none() && !cell.has_wall(dir))
                .count()
        })
        .sum()
}

/// True when the open passages among the cells of `bounds` form a spanning
/// tree: `cells - 1` internal openings and every cell reachable.
pub fn section_is_tree(grid: &MazeGrid, bounds: &SectionBounds) -> bool {
    let cells = bounds.cell_count();
    if cells == 0 {
        return true;
    }

    let internal_edges: usize = bounds
        .cells()
        .map(|(x, y)| {
            [Direction::Right, Direction::Bottom]
                .iter()
                .filter(|&&dir| {
                    bounds.neighbour(x, y, dir).is_some() && grid.is_open(x, y, dir)
                })
                .count()
        })
        .sum();

    let reached = flood_fill(grid, (bounds.start_x, bounds.start_y), |x, y| {
        bounds.contains(x, y)
    });

    internal_edges == cells - 1 && reached == cells
}

fn flood_fill<F>(grid: &MazeGrid, start: (usize, usize), allowed: F) -> usize
where
    F: Fn(usize, usize) -> bool,
{
    if !grid.contains(start.0, start.1) || !allowed(start.0, start.1) {
        return 0;
    }

    let mut seen = vec![vec![false; grid.height()]; grid.width()];
    let mut queue = VecDeque::new();
    seen[start.0][start.1] = true;
    queue.push_back(start);
    let mut count = 0;

    while let Some((x, y)) = queue.pop_front() {
        count += 1;
        for &dir in Direction::all() {
            if !grid.is_open(x, y, dir) {
                continue;
            }
            if let Some((nx, ny)) = grid.neighbour(x, y, dir) {
                if !seen[nx][ny] && allowed(nx, ny) {
                    seen[nx][ny] = true;
                    queue.push_back((nx, ny));
                }
            }
        }
    }

    count
}
