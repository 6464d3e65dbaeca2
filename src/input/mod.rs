use crate::application::Session;
use macroquad::prelude::*;

/// Forward this frame's pointer presses to the session.
/// A left press toggles the cell under the cursor; presses outside the
/// board fall through as no-ops inside the session.
pub fn handle_pointer_input(session: &mut Session) {
    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        session.pointer_down(x as i32, y as i32);
    }
}

/// Forward this frame's key presses to the session
pub fn handle_keyboard_input(session: &mut Session) {
    type KeyAction = (KeyCode, fn(&mut Session));

    let bindings: [KeyAction; 3] = [
        (KeyCode::Space, Session::toggle_running),
        (KeyCode::C, Session::clear),
        (KeyCode::R, Session::randomize),
    ];

    for (key, action) in bindings {
        if is_key_pressed(key) {
            action(session);
        }
    }
}
