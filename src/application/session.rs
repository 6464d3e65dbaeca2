use crate::domain::{Grid, ViewMapping};

/// Session orchestrates one interactive simulation. This is the
/// application layer that turns input events into domain operations: it
/// owns the grid, the view mapping, and the run/pause state machine.
///
/// A fresh session starts paused with every cell dead. Time only moves
/// through `tick`, and `tick` only advances the board while running.
pub struct Session {
    grid: Grid,
    view: ViewMapping,
    paused: bool,
    generation: u64,
}

impl Session {
    /// Create a paused session with the given grid dimensions and the
    /// default view mapping.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            view: ViewMapping::default(),
            paused: true,
            generation: 0,
        }
    }

    /// Install a different view mapping (builder pattern)
    pub fn with_view(mut self, view: ViewMapping) -> Self {
        self.view = view;
        self
    }

    /// Handle a pointer press at pixel (x, y): toggle the covered cell.
    /// Presses outside the board are a valid no-op, not an error.
    pub fn pointer_down(&mut self, x: i32, y: i32) {
        if let Some((row, col)) = self.grid.cell_at_pixel(x, y, &self.view) {
            self.grid.toggle(row, col);
        }
    }

    /// Flip between paused and running
    pub fn toggle_running(&mut self) {
        self.paused = !self.paused;
    }

    /// One driver time-step: advance exactly one generation while
    /// running, do nothing at all while paused.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.grid.advance();
        self.generation += 1;
    }

    /// Kill every cell, reset the generation counter, and pause
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.paused = true;
    }

    /// Repopulate the board at random, reset the generation counter,
    /// and pause
    pub fn randomize(&mut self) {
        self.grid.randomize();
        self.generation = 0;
        self.paused = true;
    }

    /// Read-only view of the board for rendering
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn view(&self) -> &ViewMapping {
        &self.view
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Completed generations since the last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_new_session_is_paused_and_dead() {
        let session = Session::new(20, 20);
        assert!(session.is_paused());
        assert_eq!(session.generation(), 0);
        assert_eq!(session.grid().live_cells(), 0);
        assert_eq!(session.grid().dimensions(), (20, 20));
    }

    #[test]
    #[should_panic]
    fn test_zero_sized_session_is_rejected() {
        Session::new(0, 20);
    }

    #[test]
    fn test_toggle_running_twice_restores_paused() {
        let mut session = Session::new(10, 10);

        session.toggle_running();
        assert!(!session.is_paused());

        session.toggle_running();
        assert!(session.is_paused());
    }

    #[test]
    fn test_tick_while_paused_changes_nothing() {
        let mut session = Session::new(10, 10);
        session.pointer_down(25, 25); // board is not trivially empty
        let before = session.grid().clone();

        session.tick();

        assert_eq!(*session.grid(), before);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_tick_while_running_advances_one_generation() {
        // Vertical blinker around (2, 2), placed by clicking cell centers
        let mut session = Session::new(10, 10).with_view(ViewMapping::new(0, 0, 10));
        for (row, col) in [(1, 2), (2, 2), (3, 2)] {
            session.pointer_down(col * 10 + 5, row * 10 + 5);
        }

        session.toggle_running();
        session.tick();

        assert_eq!(session.generation(), 1);
        // One advance turns the vertical blinker horizontal
        assert_eq!(session.grid().get(2, 1), Some(Cell::Alive));
        assert_eq!(session.grid().get(2, 2), Some(Cell::Alive));
        assert_eq!(session.grid().get(2, 3), Some(Cell::Alive));
        assert_eq!(session.grid().get(1, 2), Some(Cell::Dead));
        assert_eq!(session.grid().get(3, 2), Some(Cell::Dead));
    }

    #[test]
    fn test_pointer_down_toggles_the_covered_cell() {
        let mut session = Session::new(20, 20);

        // Default layout: cell (0, 0) spans pixels 10..40 on both axes
        session.pointer_down(12, 38);
        assert_eq!(session.grid().get(0, 0), Some(Cell::Alive));

        // The same press toggles it back off
        session.pointer_down(12, 38);
        assert_eq!(session.grid().get(0, 0), Some(Cell::Dead));
    }

    #[test]
    fn test_pointer_down_outside_the_board_is_a_no_op() {
        let mut session = Session::new(20, 20);
        let before = session.grid().clone();

        session.pointer_down(9, 9); // above/left of the origin
        session.pointer_down(-40, 300); // off the window entirely
        session.pointer_down(10 + 600, 10); // right boundary, exclusive

        assert_eq!(*session.grid(), before);
    }

    #[test]
    fn test_edits_land_before_the_next_tick() {
        // A click handled in the same frame as a tick applies first: the
        // lone cell it creates is already extinct after the advance
        let mut session = Session::new(10, 10);
        session.toggle_running();

        session.pointer_down(25, 25);
        assert_eq!(session.grid().live_cells(), 1);
        session.tick();
        assert_eq!(session.grid().live_cells(), 0);
    }

    #[test]
    fn test_clear_resets_and_pauses() {
        let mut session = Session::new(10, 10);
        session.pointer_down(25, 25);
        session.toggle_running();
        session.tick();

        session.clear();

        assert!(session.is_paused());
        assert_eq!(session.generation(), 0);
        assert_eq!(session.grid().live_cells(), 0);
    }

    #[test]
    fn test_randomize_resets_the_counter_and_pauses() {
        let mut session = Session::new(10, 10);
        session.toggle_running();
        session.tick();

        session.randomize();

        assert!(session.is_paused());
        assert_eq!(session.generation(), 0);
        assert_eq!(session.grid().dimensions(), (10, 10));
    }
}
