// src/maze/grid.rs

use std::fmt;

use crate::maze::section::{SectionLayout, SectionView};
use crate::maze::{Direction, MazeCell};

/// The maze: `width * height` cells stored column-major (`columns[x][y]`).
///
/// Dimensions are fixed at construction. Outside the crate the grid is
/// read-only; walls are only ever knocked down in pairs by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    columns: Vec<Vec<MazeCell>>,
}

impl MazeGrid {
    /// A grid with every wall standing and nothing visited.
    pub fn new(width: usize, height: usize) -> Self {
        MazeGrid {
            width,
            height,
            columns: vec![vec![MazeCell::default(); height]; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Panics when `(x, y)` is outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> &MazeCell {
        match self.get(x, y) {
            Some(cell) => cell,
            None => panic!(
                "cell ({}, {}) out of range for {}x{} grid",
                x, y, self.width, self.height
            ),
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&MazeCell> {
        self.columns.get(x).and_then(|column| column.get(y))
    }

    /// Read access to the raw cell storage, indexed `[x][y]`.
    pub fn columns(&self) -> &[Vec<MazeCell>] {
        &self.columns
    }

    /// Iterates `(x, y, cell)` column by column.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &MazeCell)> + '_ {
        self.columns.iter().enumerate().flat_map(|(x, column)| {
            column.iter().enumerate().map(move |(y, cell)| (x, y, cell))
        })
    }

    /// The in-grid neighbour of `(x, y)` in `direction`.
    pub fn neighbour(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        direction
            .step(x, y)
            .filter(|&(nx, ny)| self.contains(nx, ny))
    }

    /// True when there is no wall between `(x, y)` and its neighbour in
    /// `direction`. The outer boundary always counts as closed.
    pub fn is_open(&self, x: usize, y: usize, direction: Direction) -> bool {
        self.neighbour(x, y, direction).is_some() && !self.cell(x, y).has_wall(direction)
    }

    pub(crate) fn cell_mut(&mut self, x: usize, y: usize) -> &mut MazeCell {
        let (width, height) = (self.width, self.height);
        match self.columns.get_mut(x).and_then(|column| column.get_mut(y)) {
            Some(cell) => cell,
            None => panic!(
                "cell ({}, {}) out of range for {}x{} grid",
                x, y, width, height
            ),
        }
    }

    /// Knocks down the wall between `(x, y)` and its neighbour, on both sides.
    pub(crate) fn open_wall(&mut self, x: usize, y: usize, direction: Direction) {
        let (nx, ny) = match self.neighbour(x, y, direction) {
            Some(pos) => pos,
            None => panic!(
                "no neighbour {:?} of ({}, {}) in {}x{} grid",
                direction, x, y, self.width, self.height
            ),
        };
        self.cell_mut(x, y).set_wall(direction, false);
        self.cell_mut(nx, ny).set_wall(direction.opposite(), false);
    }

    /// Splits the storage into one mutable view per section of `layout`.
    ///
    /// Column bands come from `chunks_mut` on the columns and each column is
    /// then cut into row ranges, so no two views can alias a cell.
    pub(crate) fn section_views(&mut self, layout: &SectionLayout) -> Vec<SectionView<'_>> {
        let size = layout.section_size();
        let sections_y = layout.sections_y();
        let mut views = Vec::with_capacity(layout.section_count());

        for (sx, band) in self.columns.chunks_mut(size).enumerate() {
            let band_width = band.len();
            let mut per_section: Vec<Vec<&mut [MazeCell]>> =
                (0..sections_y).map(|_| Vec::with_capacity(band_width)).collect();

            for column in band {
                for (sy, rows) in column.chunks_mut(size).enumerate() {
                    per_section[sy].push(rows);
                }
            }

            for (sy, columns) in per_section.into_iter().enumerate() {
                views.push(SectionView::new(layout.bounds(sx, sy), columns));
            }
        }

        views
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }
        let mut top = String::from("+");
        for x in 0..self.width {
            top.push_str(if self.cell(x, 0).wall_top { "---+" } else { "   +" });
        }
        writeln!(f, "{}", top)?;

        for y in 0..self.height {
            let mut body = String::from(if self.cell(0, y).wall_left { "|" } else { " " });
            let mut bottom = String::from("+");
            for x in 0..self.width {
                let cell = self.cell(x, y);
                body.push_str("   ");
                body.push(if cell.wall_right { '|' } else { ' ' });
                bottom.push_str(if cell.wall_bottom { "---+" } else { "   +" });
            }
            writeln!(f, "{}", body)?;
            writeln!(f, "{}", bottom)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_dimensions() {
        let grid = MazeGrid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.columns().len(), 4);
        assert!(grid.columns().iter().all(|column| column.len() == 3));
        assert!(grid.iter().all(|(_, _, cell)| *cell == MazeCell::default()));
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = MazeGrid::new(2, 2);
        assert!(grid.get(1, 1).is_some());
        assert!(grid.get(2, 0).is_none());
        assert!(grid.get(0, 2).is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_cell_out_of_range_panics() {
        let grid = MazeGrid::new(2, 2);
        grid.cell(5, 0);
    }

    #[test]
    fn test_open_wall_clears_both_sides() {
        let mut grid = MazeGrid::new(3, 3);
        grid.open_wall(1, 1, Direction::Right);
        assert!(!grid.cell(1, 1).wall_right);
        assert!(!grid.cell(2, 1).wall_left);

        grid.open_wall(1, 1, Direction::Top);
        assert!(!grid.cell(1, 1).wall_top);
        assert!(!grid.cell(1, 0).wall_bottom);

        assert!(grid.is_open(2, 1, Direction::Left));
        assert!(!grid.is_open(1, 1, Direction::Bottom));
    }

    #[test]
    #[should_panic(expected = "no neighbour")]
    fn test_open_wall_on_boundary_panics() {
        let mut grid = MazeGrid::new(3, 3);
        grid.open_wall(0, 0, Direction::Left);
    }

    #[test]
    fn test_boundary_never_open() {
        let mut grid = MazeGrid::new(1, 1);
        grid.columns[0][0].set_wall(Direction::Left, false);
        assert!(!grid.is_open(0, 0, Direction::Left));
    }

    #[test]
    fn test_section_views_tile_grid() {
        let mut grid = MazeGrid::new(7, 5);
        let layout = SectionLayout::new(7, 5, 3);
        let views = grid.section_views(&layout);
        assert_eq!(views.len(), layout.section_count());

        let covered: usize = views.iter().map(|view| view.bounds().cell_count()).sum();
        assert_eq!(covered, 35);
    }

    #[test]
    fn test_display_closed_grid() {
        let grid = MazeGrid::new(2, 1);
        let text = grid.to_string();
        assert_eq!(text, "+---+---+\n|   |   |\n+---+---+\n");
    }

    #[test]
    fn test_display_shows_openings() {
        let mut grid = MazeGrid::new(2, 1);
        grid.open_wall(0, 0, Direction::Right);
        assert_eq!(grid.to_string(), "+---+---+\n|       |\n+---+---+\n");
    }
}
