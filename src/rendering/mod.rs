use crate::application::Session;
use crate::domain::{Grid, ViewMapping};
use macroquad::prelude::*;

/// Height of the status strip drawn under the board
pub const STATUS_BAR_HEIGHT: f32 = 44.0;

/// Draw the board: a 1-pixel white outline for every cell, a red fill on
/// top of it where the cell is alive
pub fn draw_board(grid: &Grid, view: &ViewMapping) {
    let live_color = Color::from_rgba(255, 0, 0, 255);
    let outline_color = WHITE;
    let size = view.cell_size() as f32;

    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = view.cell_origin(row, col);
        let (x, y) = (x as f32, y as f32);

        draw_rectangle_lines(x, y, size, size, 1.0, outline_color);
        if cell.is_alive() {
            draw_rectangle(x, y, size, size, live_color);
        }
    }
}

/// Draw run state, counters, and key help under the board
pub fn draw_status(session: &Session) {
    let view = session.view();
    let (width, height) = session.grid().dimensions();
    let left = view.left() as f32;
    let baseline = (view.top() + height as i32 * view.cell_size()) as f32 + 18.0;

    let (state, state_color) = if session.is_paused() {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    } else {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    };
    draw_text(state, left, baseline, 20.0, state_color);

    let counters = format!(
        "Gen {}   Alive {}/{}",
        session.generation(),
        session.grid().live_cells(),
        width * height
    );
    draw_text(&counters, left + 90.0, baseline, 20.0, WHITE);

    draw_text(
        "Click: toggle cell   Space: run/pause   C: clear   R: random",
        left,
        baseline + 18.0,
        16.0,
        GRAY,
    );
}
