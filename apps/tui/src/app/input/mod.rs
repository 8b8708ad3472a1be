pub mod helpers;
mod pointer;
pub mod screens;

use crate::app::state::App;
use crossterm::event::{KeyCode, MouseEvent};
use ratatui::layout::Rect;

pub fn handle_input(app: &mut App, key: KeyCode) {
    screens::dispatch_input(app, key);
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, screen: Rect) {
    pointer::handle_pointer(app, mouse, screen);
}
