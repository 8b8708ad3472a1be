use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.close_search(),
        KeyCode::Enter => app.confirm_search(),
        KeyCode::Up => {
            app.search_selection = wrap_decrement(app.search_selection, app.search_results.len());
        }
        KeyCode::Down => {
            app.search_selection = wrap_increment(app.search_selection, app.search_results.len());
        }
        KeyCode::Backspace => {
            app.search_query.pop();
            app.update_search();
        }
        KeyCode::Char(c) => {
            app.search_query.push(c);
            app.update_search();
        }
        _ => {}
    }
}
