// UI module for the coffee trade dashboard
// Dashboard plus search and help overlays

pub mod screens;
pub mod widgets;

use crate::app::{App, AppScreen};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::dashboard::render_dashboard(app, f);

    match app.screen {
        AppScreen::Dashboard => {}
        AppScreen::Search => screens::search::render_search(app, f),
    }

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}
