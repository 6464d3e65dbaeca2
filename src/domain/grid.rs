use super::{Cell, ViewMapping};
use rand::Rng;

/// Grid owns the 2D cell matrix and the generation-advance algorithm.
/// Cells live in a flat row-major vector indexed by (row, col).
///
/// The board edge is hard: positions outside the matrix are simply not
/// neighbors, so corner cells have 3 candidate neighbors and non-corner
/// edge cells 5. There is no wraparound.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert (row, col) to the flat vector index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get the cell at (row, col), or None when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[self.index(row, col)])
    }

    /// Flip the cell at (row, col) between dead and alive.
    ///
    /// # Panics
    /// Panics if (row, col) is outside the grid. Editing a cell that does
    /// not exist is a caller bug; clamping would flip the wrong cell.
    pub fn toggle(&mut self, row: usize, col: usize) {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggled();
    }

    /// Count live cells among the up-to-8 neighbors of (row, col).
    /// Positions beyond the board edge are skipped, never wrapped.
    ///
    /// # Panics
    /// Panics if (row, col) is outside the grid.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Advance the whole board by one generation.
    ///
    /// Every next state is computed from the pre-advance matrix and the
    /// matrix is then replaced wholesale, so a cell never sees a neighbor
    /// that was already updated in the same pass.
    pub fn advance(&mut self) {
        let next = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.index(row, col)];
                current.next_state(self.count_live_neighbors(row, col))
            })
            .collect();
        self.cells = next;
    }

    /// Map a pixel position to the (row, col) cell it covers, or None when
    /// the point lies left/above the board origin or at/beyond its
    /// right/bottom edge.
    ///
    /// Negative offsets are rejected before the division; integer division
    /// on a negative dividend would otherwise round back onto the board.
    pub fn cell_at_pixel(&self, x: i32, y: i32, view: &ViewMapping) -> Option<(usize, usize)> {
        let dx = x - view.left();
        let dy = y - view.top();
        if dx < 0 || dy < 0 {
            return None;
        }
        let col = (dx / view.cell_size()) as usize;
        let row = (dy / view.cell_size()) as usize;
        (row < self.height && col < self.width).then_some((row, col))
    }

    /// Kill every cell, keeping dimensions
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Repopulate at random (30% chance of alive), keeping dimensions
    pub fn randomize(&mut self) {
        let mut rng = rand::rng();
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.3) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    /// Number of live cells on the board
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.cells[self.index(row, col)]))
    }
}
