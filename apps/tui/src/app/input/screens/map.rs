use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_map_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Char('m') => app.close_map(),
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
}
