/// Cell is the fundamental unit of the board.
/// Each cell is either Dead or Alive, nothing in between.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// The opposite state, used by click-to-edit toggling
    pub const fn toggled(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state under the classic B3/S23 rule:
    /// 1. Live cell with 2 or 3 live neighbors survives
    /// 2. Dead cell with exactly 3 live neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn next_state(self, live_neighbors: u8) -> Self {
        match (self, live_neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
