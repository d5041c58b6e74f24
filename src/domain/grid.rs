use super::Cell;

/// Grid owns a fixed `cols × rows` arrangement of cells laid over a window.
///
/// Cells are stored column-major (`cells[col][row]`). Pixel origins are
/// rounded per index from the floating-point cell size so rounding error
/// never accumulates across the window.
#[derive(Clone, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cell_width: f32,
    cell_height: f32,
    cell_width_px: i32,
    cell_height_px: i32,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Lay out a dead grid of `cols × rows` cells over a `window_width × window_height` window
    pub fn new(window_width: u32, window_height: u32, cols: usize, rows: usize) -> Self {
        let cell_width = window_width as f32 / cols as f32;
        let cell_height = window_height as f32 / rows as f32;
        let mut grid = Self {
            cols,
            rows,
            cell_width,
            cell_height,
            cell_width_px: cell_width.round() as i32,
            cell_height_px: cell_height.round() as i32,
            cells: Vec::new(),
        };
        grid.reset();
        grid
    }

    /// Discard every cell and rebuild the same layout, all dead
    pub fn reset(&mut self) {
        let xs: Vec<i32> = (0..self.cols)
            .map(|i| (i as f32 * self.cell_width).round() as i32)
            .collect();
        let ys: Vec<i32> = (0..self.rows)
            .map(|j| (j as f32 * self.cell_height).round() as i32)
            .collect();

        self.cells = xs
            .iter()
            .map(|&x| ys.iter().map(|&y| Cell::new(x, y)).collect())
            .collect();
    }

    /// Grid dimensions as `(cols, rows)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Integer cell size used for hit-testing and drawing
    pub const fn cell_pixel_size(&self) -> (i32, i32) {
        (self.cell_width_px, self.cell_height_px)
    }

    /// Unrounded cell size derived from the window
    pub const fn cell_size(&self) -> (f32, f32) {
        (self.cell_width, self.cell_height)
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        self.cells.get(col).and_then(|column| column.get(row))
    }

    pub fn cell_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        self.cells.get_mut(col).and_then(|column| column.get_mut(row))
    }

    /// Iterate cells column by column
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().flatten()
    }

    pub fn alive_count(&self) -> usize {
        self.cells().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbours of `(col, row)` without wrapping at the edges.
    ///
    /// `None` if `(col, row)` is outside the grid.
    pub fn live_neighbors(&self, col: usize, row: usize) -> Option<u8> {
        (col < self.cols && row < self.rows).then(|| self.count_live_neighbors(col, row))
    }

    fn count_live_neighbors(&self, col: usize, row: usize) -> u8 {
        let col_range = col.saturating_sub(1)..=(col + 1).min(self.cols - 1);
        col_range
            .flat_map(|i| {
                let row_range = row.saturating_sub(1)..=(row + 1).min(self.rows - 1);
                row_range.map(move |j| (i, j))
            })
            .filter(|&(i, j)| (i, j) != (col, row))
            .filter(|&(i, j)| self.cells[i][j].is_alive())
            .count() as u8
    }

    /// Advance one generation.
    ///
    /// Every pending value is computed from current states before any cell
    /// is committed.
    pub fn step(&mut self) {
        for col in 0..self.cols {
            for row in 0..self.rows {
                let neighbors = self.count_live_neighbors(col, row);
                self.cells[col][row].apply_rule(neighbors);
            }
        }
        self.commit();
    }

    /// Make every cell's pending state current
    pub fn commit(&mut self) {
        self.cells.iter_mut().flatten().for_each(Cell::update);
    }

    /// Toggle the first cell (column-major) containing pixel `(px, py)`.
    ///
    /// Returns the grid index of the toggled cell, if any.
    pub fn locate_and_toggle(&mut self, px: i32, py: i32) -> Option<(usize, usize)> {
        let (w, h) = self.cell_pixel_size();
        for (col, column) in self.cells.iter_mut().enumerate() {
            if let Some(row) = column.iter().position(|cell| cell.is_clicked(px, py, w, h)) {
                column[row].toggle();
                return Some((col, row));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellState;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const GLIDER: [(usize, usize); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

    fn seed(grid: &mut Grid, alive: &[(usize, usize)]) {
        for &(col, row) in alive {
            if let Some(cell) = grid.cell_mut(col, row) {
                cell.spawn();
            }
        }
        grid.commit();
    }

    fn alive_set(grid: &Grid) -> Vec<(usize, usize)> {
        let (cols, rows) = grid.dimensions();
        (0..cols)
            .flat_map(|c| (0..rows).map(move |r| (c, r)))
            .filter(|&(c, r)| grid.cell(c, r).is_some_and(Cell::is_alive))
            .collect()
    }

    fn snapshot(grid: &Grid) -> Vec<Vec<bool>> {
        let (cols, rows) = grid.dimensions();
        (0..cols)
            .map(|c| (0..rows).map(|r| grid.cell(c, r).is_some_and(Cell::is_alive)).collect())
            .collect()
    }

    /// Straightforward out-of-place Conway generation over a bool matrix
    fn reference_step(board: &[Vec<bool>]) -> Vec<Vec<bool>> {
        let cols = board.len() as i64;
        let rows = board[0].len() as i64;
        let mut next = vec![vec![false; rows as usize]; cols as usize];
        for c in 0..cols {
            for r in 0..rows {
                let mut n = 0;
                for dc in -1..=1 {
                    for dr in -1..=1 {
                        let (nc, nr) = (c + dc, r + dr);
                        if (dc, dr) != (0, 0)
                            && (0..cols).contains(&nc)
                            && (0..rows).contains(&nr)
                            && board[nc as usize][nr as usize]
                        {
                            n += 1;
                        }
                    }
                }
                let alive = board[c as usize][r as usize];
                next[c as usize][r as usize] = matches!((alive, n), (true, 2 | 3) | (false, 3));
            }
        }
        next
    }

    #[test]
    fn test_layout_rounds_each_origin() {
        let grid = Grid::new(100, 100, 3, 3);
        assert_eq!(grid.cell_size(), (100.0 / 3.0, 100.0 / 3.0));
        assert_eq!(grid.cell_pixel_size(), (33, 33));
        let xs: Vec<i32> = (0..3).map(|c| grid.cell(c, 0).map_or(-1, Cell::x)).collect();
        // 2 * 33.33 rounds to 67, not 2 * 33
        assert_eq!(xs, vec![0, 33, 67]);
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(900, 600, 60, 40);
        assert_eq!(grid.dimensions(), (60, 40));
        assert_eq!(grid.cell_pixel_size(), (15, 15));
        assert_eq!(grid.cells().count(), 2400);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_corner_and_edge_neighbor_limits() {
        let mut grid = Grid::new(100, 100, 6, 5);
        let all: Vec<(usize, usize)> = (0..6).flat_map(|c| (0..5).map(move |r| (c, r))).collect();
        seed(&mut grid, &all);

        assert_eq!(grid.live_neighbors(0, 0), Some(3));
        assert_eq!(grid.live_neighbors(5, 4), Some(3));
        assert_eq!(grid.live_neighbors(0, 4), Some(3));
        assert_eq!(grid.live_neighbors(5, 0), Some(3));
        assert_eq!(grid.live_neighbors(0, 2), Some(5));
        assert_eq!(grid.live_neighbors(3, 0), Some(5));
        assert_eq!(grid.live_neighbors(2, 2), Some(8));
    }

    #[test]
    fn test_neighbors_outside_grid_is_none() {
        let mut grid = Grid::new(100, 100, 6, 5);
        seed(&mut grid, &[(5, 3), (5, 4)]);

        assert_eq!(grid.live_neighbors(6, 4), None);
        assert_eq!(grid.live_neighbors(5, 5), None);
        assert_eq!(grid.live_neighbors(usize::MAX, 0), None);
        assert_eq!(grid.live_neighbors(5, 4), Some(1));
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = Grid::new(100, 100, 5, 5);
        seed(&mut grid, &[(1, 2), (2, 2), (3, 2)]);

        grid.step();
        assert_eq!(alive_set(&grid), vec![(2, 1), (2, 2), (2, 3)]);
        grid.step();
        assert_eq!(alive_set(&grid), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_block_is_stable_in_corner() {
        let mut grid = Grid::new(100, 100, 5, 5);
        let block = [(0, 0), (0, 1), (1, 0), (1, 1)];
        seed(&mut grid, &block);
        grid.step();
        assert_eq!(alive_set(&grid), block.to_vec());
    }

    #[test]
    fn test_no_wraparound() {
        // A vertical blinker on the left edge must not feed the right edge
        let mut grid = Grid::new(100, 100, 5, 5);
        seed(&mut grid, &[(0, 1), (0, 2), (0, 3)]);
        grid.step();
        assert_eq!(alive_set(&grid), vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_step_matches_reference_on_random_snapshots() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..20 {
            let cols = rng.random_range(5..20);
            let rows = rng.random_range(5..20);
            let mut grid = Grid::new(400, 300, cols, rows);
            let alive: Vec<(usize, usize)> = (0..cols)
                .flat_map(|c| (0..rows).map(move |r| (c, r)))
                .filter(|_| rng.random_bool(0.35))
                .collect();
            seed(&mut grid, &alive);

            let mut expected = snapshot(&grid);
            for _ in 0..3 {
                expected = reference_step(&expected);
                grid.step();
                assert_eq!(snapshot(&grid), expected);
            }
        }
    }

    #[test]
    fn test_glider_moves_one_cell_diagonally() {
        let mut grid = Grid::new(100, 100, 10, 10);
        for &(col, row) in &GLIDER {
            let (px, py) = (col as i32 * 10 + 5, row as i32 * 10 + 5);
            assert_eq!(grid.locate_and_toggle(px, py), Some((col, row)));
        }
        grid.commit();

        for _ in 0..4 {
            grid.step();
        }

        let mut expected: Vec<(usize, usize)> = GLIDER.iter().map(|&(c, r)| (c + 1, r + 1)).collect();
        expected.sort();
        assert_eq!(alive_set(&grid), expected);
    }

    #[test]
    fn test_locate_and_toggle_misses_borders() {
        let mut grid = Grid::new(100, 100, 10, 10);
        assert_eq!(grid.locate_and_toggle(10, 10), None);
        assert_eq!(grid.locate_and_toggle(0, 0), None);
        assert_eq!(grid.locate_and_toggle(11, 11), Some((1, 1)));
        assert_eq!(grid.locate_and_toggle(-5, 50), None);
        assert_eq!(grid.locate_and_toggle(150, 50), None);
    }

    #[test]
    fn test_toggle_only_affects_pending_until_commit() {
        let mut grid = Grid::new(100, 100, 10, 10);
        grid.locate_and_toggle(55, 55);
        let cell = grid.cell(5, 5).copied();
        assert_eq!(cell.map(|c| c.state()), Some(CellState::Dead));
        assert_eq!(cell.map(|c| c.pending()), Some(CellState::Alive));

        grid.locate_and_toggle(55, 55);
        grid.commit();
        assert_eq!(alive_set(&grid), vec![(5, 5)]);
    }

    #[test]
    fn test_reset_keeps_layout() {
        let mut grid = Grid::new(900, 600, 60, 40);
        seed(&mut grid, &GLIDER);
        let before: Vec<(i32, i32)> = grid.cells().map(|c| (c.x(), c.y())).collect();

        grid.reset();

        assert_eq!(grid.alive_count(), 0);
        assert!(grid.cells().all(|c| c.pending() == CellState::Dead));
        assert_eq!(grid.dimensions(), (60, 40));
        assert_eq!(grid.cell_pixel_size(), (15, 15));
        let after: Vec<(i32, i32)> = grid.cells().map(|c| (c.x(), c.y())).collect();
        assert_eq!(before, after);
    }
}
