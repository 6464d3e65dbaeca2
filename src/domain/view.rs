/// ViewMapping places the board on screen: pixel offsets of the board
/// origin plus the drawn size of one cell. It only translates between
/// pointer coordinates and grid coordinates; set once at startup.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ViewMapping {
    left: i32,
    top: i32,
    cell_size: i32,
}

impl ViewMapping {
    /// Create a mapping with the board origin at (left, top).
    ///
    /// # Panics
    /// Panics if `cell_size` is not positive.
    pub const fn new(left: i32, top: i32, cell_size: i32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        Self {
            left,
            top,
            cell_size,
        }
    }

    pub const fn left(&self) -> i32 {
        self.left
    }

    pub const fn top(&self) -> i32 {
        self.top
    }

    pub const fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Top-left pixel of the rectangle cell (row, col) is drawn in
    pub const fn cell_origin(&self, row: usize, col: usize) -> (i32, i32) {
        (
            self.left + col as i32 * self.cell_size,
            self.top + row as i32 * self.cell_size,
        )
    }
}

impl Default for ViewMapping {
    /// 30-pixel cells, board origin 10 pixels in from the window corner
    fn default() -> Self {
        Self::new(10, 10, 30)
    }
}
