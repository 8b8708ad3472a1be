mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use coffee_trade::config::init_app_config;
use coffee_trade::logging::init_logger;
use color_eyre::Result;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    let headless = args.headless(is_terminal());
    init_logger(&config.log_level, config.log_target(headless))?;
    info!(
        data = %config.data_path.display(),
        mode = %config.direction_mode,
        headless,
        "starting coffee-trade"
    );

    let mut app = App::new(config);

    if headless {
        return event::run_headless(&mut app, args.json).await;
    }

    // The dashboard still opens on failure and shows the error in the map panel.
    if let Err(e) = app.load_dataset().await {
        warn!(error = %e, "continuing without trade data");
    }

    let mut terminal = terminal::setup_terminal()?;
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
