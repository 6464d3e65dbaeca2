use life::{input, rendering, Session, ViewMapping};
use macroquad::prelude::*;

/// Board dimensions in cells
const GRID_WIDTH: usize = 20;
const GRID_HEIGHT: usize = 20;

/// Pixel layout of the board inside the window
const MARGIN: i32 = 10;
const CELL_SIZE: i32 = 30;
const VIEW: ViewMapping = ViewMapping::new(MARGIN, MARGIN, CELL_SIZE);

/// Seconds between generation advances while running
const TICK_INTERVAL: f32 = 0.1;

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: GRID_WIDTH as i32 * CELL_SIZE + 2 * MARGIN,
        window_height: GRID_HEIGHT as i32 * CELL_SIZE
            + MARGIN
            + rendering::STATUS_BAR_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut session = Session::new(GRID_WIDTH, GRID_HEIGHT).with_view(VIEW);
    let mut since_tick = 0.0_f32;

    loop {
        // Input first, so a click or pause lands before this frame's advance
        input::handle_pointer_input(&mut session);
        input::handle_keyboard_input(&mut session);

        since_tick += get_frame_time();
        if since_tick >= TICK_INTERVAL {
            session.tick();
            since_tick = 0.0;
        }

        clear_background(BLACK);
        rendering::draw_board(session.grid(), session.view());
        rendering::draw_status(&session);

        next_frame().await;
    }
}
