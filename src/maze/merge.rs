// src/maze/merge.rs

use log::debug;
use rand::Rng;

use crate::maze::{Direction, MazeGrid};
use crate::utils::util::band_len;

/// Joins neighbouring sections by opening one random wall per border band.
///
/// For each internal vertical edge (`x` a multiple of `section_size`) one row
/// is picked inside every band of `section_size` rows; for each internal
/// horizontal edge one column inside every band of columns. Must run after
/// every section has been carved. Returns the number of walls opened.
///
/// This can close loops around section corners, so the result is connected
/// but not necessarily a perfect maze.
pub fn merge_section_borders<R: Rng + ?Sized>(
    grid: &mut MazeGrid,
    section_size: usize,
    rng: &mut R,
) -> usize {
    if section_size == 0 {
        return 0;
    }
    let (width, height) = (grid.width(), grid.height());
    let mut opened = 0;

    for x in (section_size..width).step_by(section_size) {
        for y in (0..height).step_by(section_size) {
            let row = y + rng.random_range(0..band_len(y, section_size, height));
            grid.open_wall(x - 1, row, Direction::Right);
            opened += 1;
        }
    }

    for y in (section_size..height).step_by(section_size) {
        for x in (0..width).step_by(section_size) {
            let column = x + rng.random_range(0..band_len(x, section_size, width));
            grid.open_wall(column, y - 1, Direction::Bottom);
            opened += 1;
        }
    }

    debug!("Border merge opened {} walls", opened);
    opened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::analysis::open_passage_count;
    use crate::maze::SectionLayout;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_merge_on_single_section_is_noop() {
        let mut grid = MazeGrid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(merge_section_borders(&mut grid, 10, &mut rng), 0);
        assert_eq!(grid, MazeGrid::new(3, 3));
    }

    #[test]
    fn test_merge_opens_one_wall_per_band() {
        let mut grid = MazeGrid::new(10, 10);
        let mut rng = StdRng::seed_from_u64(5);
        let opened = merge_section_borders(&mut grid, 5, &mut rng);

        assert_eq!(opened, SectionLayout::new(10, 10, 5).merge_opening_count());
        assert_eq!(open_passage_count(&grid), opened);

        let vertical_top = (0..5).filter(|&y| !grid.cell(4, y).wall_right).count();
        let vertical_bottom = (5..10).filter(|&y| !grid.cell(4, y).wall_right).count();
        let horizontal_left = (0..5).filter(|&x| !grid.cell(x, 4).wall_bottom).count();
        let horizontal_right = (5..10).filter(|&x| !grid.cell(x, 4).wall_bottom).count();
        assert_eq!(
            (vertical_top, vertical_bottom, horizontal_left, horizontal_right),
            (1, 1, 1, 1)
        );
    }

    #[test]
    fn test_merge_only_touches_border_cells() {
        let mut grid = MazeGrid::new(9, 9);
        let mut rng = StdRng::seed_from_u64(11);
        merge_section_borders(&mut grid, 3, &mut rng);

        for (x, y, cell) in grid.iter() {
            let on_border = x % 3 == 0 || x % 3 == 2 || y % 3 == 0 || y % 3 == 2;
            if !on_border {
                assert_eq!(cell.open_sides(), 0, "interior cell ({}, {}) changed", x, y);
            }
        }
    }

    #[test]
    fn test_merge_with_ragged_last_band() {
        // 7 = 3 + 3 + 1: the last band is a single row/column.
        let mut grid = MazeGrid::new(7, 7);
        let mut rng = StdRng::seed_from_u64(2);
        let opened = merge_section_borders(&mut grid, 3, &mut rng);
        assert_eq!(opened, SectionLayout::new(7, 7, 3).merge_opening_count());

        assert!(!grid.cell(2, 6).wall_right);
        assert!(!grid.cell(5, 6).wall_right);
        assert!(!grid.cell(6, 2).wall_bottom);
        assert!(!grid.cell(6, 5).wall_bottom);
    }

    #[test]
    fn test_merge_with_unit_sections() {
        let mut grid = MazeGrid::new(3, 2);
        let mut rng = StdRng::seed_from_u64(8);
        let opened = merge_section_borders(&mut grid, 1, &mut rng);
        // Every internal wall is a border when sections are 1x1.
        assert_eq!(opened, 2 * 2 + 3);
        assert_eq!(open_passage_count(&grid), 7);
    }
}
