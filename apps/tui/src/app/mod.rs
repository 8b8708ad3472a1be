// App module for the coffee trade dashboard
// Holds UI state around the trade controller

pub mod input;
pub mod state;

pub use input::{handle_input, handle_mouse};
pub use state::{App, AppScreen};
