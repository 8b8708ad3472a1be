use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up => app.previous_country(),
        KeyCode::Down => app.next_country(),
        KeyCode::Left => app.previous_edge(),
        KeyCode::Right => app.next_edge(),
        KeyCode::Esc => app.leave(),
        KeyCode::Char('m') => app.toggle_mode(),
        KeyCode::Char('[') => app.previous_year(),
        KeyCode::Char(']') => app.next_year(),
        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}
