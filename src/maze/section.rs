// src/maze/section.rs
// Section geometry and the per-section depth-first carve.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::maze::{Direction, MazeCell};

/// Half-open rectangle `[start_x, end_x) x [start_y, end_y)` of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionBounds {
    pub start_x: usize,
    pub start_y: usize,
    pub end_x: usize,
    pub end_y: usize,
}

impl SectionBounds {
    pub fn new(start_x: usize, start_y: usize, end_x: usize, end_y: usize) -> Self {
        SectionBounds { start_x, start_y, end_x, end_y }
    }

    pub fn width(&self) -> usize {
        self.end_x - self.start_x
    }

    pub fn height(&self) -> usize {
        self.end_y - self.start_y
    }

    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.start_x && x < self.end_x && y >= self.start_y && y < self.end_y
    }

    /// Neighbour of `(x, y)` in `direction`, only if it stays inside this
    /// section. Carving never crosses a section edge.
    pub fn neighbour(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        direction
            .step(x, y)
            .filter(|&(nx, ny)| self.contains(nx, ny))
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (start_y, end_y) = (self.start_y, self.end_y);
        (self.start_x..self.end_x).flat_map(move |x| (start_y..end_y).map(move |y| (x, y)))
    }
}

/// How a `width x height` grid is cut into sections of `section_size`.
///
/// The last section on each axis is clipped to the grid edge, so sections
/// tile the grid with no overlap and no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    width: usize,
    height: usize,
    section_size: usize,
    sections_x: usize,
    sections_y: usize,
}

impl SectionLayout {
    /// # Panics
    ///
    /// Panics if `section_size` is zero. `MazeGenerator` validates its config
    /// before building a layout, so it reports that case as
    /// `MazeError::InvalidSectionSize` instead.
    pub fn new(width: usize, height: usize, section_size: usize) -> Self {
        assert!(section_size > 0, "section size must be positive");
        SectionLayout {
            width,
            height,
            section_size,
            sections_x: width.div_ceil(section_size),
            sections_y: height.div_ceil(section_size),
        }
    }

    pub fn section_size(&self) -> usize {
        self.section_size
    }

    pub fn sections_x(&self) -> usize {
        self.sections_x
    }

    pub fn sections_y(&self) -> usize {
        self.sections_y
    }

    pub fn section_count(&self) -> usize {
        self.sections_x * self.sections_y
    }

    /// Bounds of section `(sx, sy)`.
    pub fn bounds(&self, sx: usize, sy: usize) -> SectionBounds {
        let start_x = sx * self.section_size;
        let start_y = sy * self.section_size;
        SectionBounds::new(
            start_x,
            start_y,
            (start_x + self.section_size).min(self.width),
            (start_y + self.section_size).min(self.height),
        )
    }

    /// Row-major section index, stable regardless of scheduling order.
    pub fn index(&self, sx: usize, sy: usize) -> usize {
        sy * self.sections_x + sx
    }

    /// Index of the section whose top-left corner is `bounds`' start.
    pub fn index_of(&self, bounds: &SectionBounds) -> usize {
        self.index(
            bounds.start_x / self.section_size,
            bounds.start_y / self.section_size,
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionBounds> + '_ {
        (0..self.sections_y)
            .flat_map(move |sy| (0..self.sections_x).map(move |sx| self.bounds(sx, sy)))
    }

    /// Number of openings the border merge adds: one per row band along each
    /// internal vertical edge and one per column band along each horizontal one.
    pub fn merge_opening_count(&self) -> usize {
        self.sections_x.saturating_sub(1) * self.sections_y
            + self.sections_x * self.sections_y.saturating_sub(1)
    }
}

/// Mutable access to exactly the cells of one section.
///
/// Holds one row-range slice per column, handed out by
/// [`MazeGrid::section_views`](crate::maze::MazeGrid), so a task working on a
/// view cannot reach a cell belonging to any other section.
#[derive(Debug)]
pub struct SectionView<'a> {
    bounds: SectionBounds,
    columns: Vec<&'a mut [MazeCell]>,
}

impl<'a> SectionView<'a> {
    pub(crate) fn new(bounds: SectionBounds, columns: Vec<&'a mut [MazeCell]>) -> Self {
        debug_assert_eq!(columns.len(), bounds.width());
        debug_assert!(columns.iter().all(|rows| rows.len() == bounds.height()));
        SectionView { bounds, columns }
    }

    pub fn bounds(&self) -> SectionBounds {
        self.bounds
    }

    /// Cell at global grid coordinates. Panics outside the section.
    pub fn cell(&self, x: usize, y: usize) -> &MazeCell {
        assert!(self.bounds.contains(x, y), "({}, {}) outside {:?}", x, y, self.bounds);
        &self.columns[x - self.bounds.start_x][y - self.bounds.start_y]
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> &mut MazeCell {
        assert!(self.bounds.contains(x, y), "({}, {}) outside {:?}", x, y, self.bounds);
        &mut self.columns[x - self.bounds.start_x][y - self.bounds.start_y]
    }

    /// Knocks down the wall between two cells of this section, on both sides.
    fn open_wall(&mut self, x: usize, y: usize, direction: Direction) {
        let (nx, ny) = match self.bounds.neighbour(x, y, direction) {
            Some(pos) => pos,
            None => panic!("no neighbour {:?} of ({}, {}) in {:?}", direction, x, y, self.bounds),
        };
        self.cell_mut(x, y).set_wall(direction, false);
        self.cell_mut(nx, ny).set_wall(direction.opposite(), false);
    }
}

/// Carves a spanning tree over the section with a randomized, iterative
/// depth-first search and returns the number of passages opened
/// (`cells - 1` for any non-empty section).
///
/// The current cell is pushed back before the chosen neighbour so that,
/// once the neighbour's branch is exhausted, the search resumes from the
/// current cell's remaining unvisited neighbours.
pub fn carve_section<R: Rng + ?Sized>(view: &mut SectionView<'_>, rng: &mut R) -> usize {
    let bounds = view.bounds();
    if bounds.cell_count() == 0 {
        return 0;
    }

    let mut stack = vec![(bounds.start_x, bounds.start_y)];
    let mut neighbours: Vec<(Direction, usize, usize)> = Vec::with_capacity(4);
    let mut opened = 0;

    while let Some((x, y)) = stack.pop() {
        if !bounds.contains(x, y) {
            continue;
        }
        view.cell_mut(x, y).visited = true;

        neighbours.clear();
        neighbours.extend(
            Direction::all()
                .iter()
                .filter_map(|&dir| bounds.neighbour(x, y, dir).map(|(nx, ny)| (dir, nx, ny))),
        );
        neighbours.shuffle(rng);

        let next = neighbours
            .iter()
            .copied()
            .find(|&(_, nx, ny)| !view.cell(nx, ny).visited);

        if let Some((direction, nx, ny)) = next {
            view.open_wall(x, y, direction);
            opened += 1;
            stack.push((x, y));
            stack.push((nx, ny));
        }
    }

    opened
}
