use coffee_trade::domain::{DirectionMode, PartnerAggregate};
use coffee_trade::trade::scale::format_value;
use coffee_trade::trade::{TradeController, TradeSnapshot};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use serde::Serialize;
use std::io::Stdout;
use std::time::Duration;
use tracing::debug;

use crate::app::{handle_input, handle_mouse, App};
use crate::ui;

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.load_dataset().await?;

    let controller = app
        .controller
        .as_ref()
        .ok_or_else(|| eyre!("trade controller was not initialised"))?;

    if json {
        render_headless_json(controller)?;
    } else {
        render_headless_stats(controller);
    }

    Ok(())
}

fn render_headless_stats(controller: &TradeController) {
    let stats = build_headless_stats(controller);

    println!("\nCoffee Trade Flows");
    println!("==================");
    match stats.year {
        Some(year) => println!("Year: {year}"),
        None => println!("Year: (no data)"),
    }
    println!("Mode: {}", stats.direction_mode.label());
    println!("Records: {}", stats.records);
    println!(
        "Flows drawn: {} ({} partners without coordinates)",
        stats.edges, stats.unplaced_partners
    );

    println!("\nTop partners by {}:", stats.direction_mode.label());
    for aggregate in stats.snapshot.aggregates {
        let partners = aggregate
            .partners
            .iter()
            .map(|partner| format!("{} ({})", partner.name, format_value(partner.total_value)))
            .collect::<Vec<_>>()
            .join(", ");
        println!("- {}: {partners}", aggregate.subject);
    }
}

fn render_headless_json(controller: &TradeController) -> Result<()> {
    let stats = build_headless_stats(controller);
    let json = serde_json::to_string_pretty(&stats)?;
    println!("{json}");
    Ok(())
}

fn build_headless_stats(controller: &TradeController) -> HeadlessStats<'_> {
    let snapshot = controller.snapshot();
    let partners: usize = snapshot
        .aggregates
        .iter()
        .map(|aggregate: &PartnerAggregate| aggregate.partners.len())
        .sum();
    let edges = snapshot.edges.len();

    HeadlessStats {
        year: controller.year(),
        direction_mode: controller.state().direction_mode,
        records: controller.working_set().len(),
        edges,
        unplaced_partners: partners.saturating_sub(edges),
        snapshot,
    }
}

#[derive(Serialize)]
struct HeadlessStats<'a> {
    year: Option<i32>,
    direction_mode: DirectionMode,
    records: usize,
    edges: usize,
    unplaced_partners: usize,
    snapshot: TradeSnapshot<'a>,
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    while app.running {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code);
            }
            Ok(Event::Mouse(mouse)) => {
                let size = terminal.size()?;
                handle_mouse(app, mouse, Rect::new(0, 0, size.width, size.height));
            }
            Ok(Event::Resize(width, height)) => {
                debug!(width, height, "terminal resized");
            }
            Ok(_) => {}
            Err(e) => debug!(error = %e, "failed to read terminal event"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffee_trade::domain::{GeoPoint, TradeRecord};
    use coffee_trade::trade::{CoordinateTable, ShowCounts};

    #[test]
    fn headless_stats_count_unplaced_partners() -> Result<()> {
        let record = |exporter: &str, importer: &str, value: f64| TradeRecord {
            year: 2019,
            exporter: exporter.to_string(),
            importer: importer.to_string(),
            value,
            weight: 0.0,
        };
        let controller = TradeController::new(
            vec![
                record("Brazil", "Germany", 100.0),
                record("Brazil", "Atlantis", 50.0),
            ],
            CoordinateTable::new([
                ("Brazil".to_string(), GeoPoint::new(-14.2, -51.9)),
                ("Germany".to_string(), GeoPoint::new(51.1, 10.4)),
            ]),
            ShowCounts::default(),
            DirectionMode::Export,
            None,
        );

        let stats = build_headless_stats(&controller);
        assert_eq!(stats.year, Some(2019));
        assert_eq!(stats.records, 2);
        assert_eq!(stats.edges, 1);
        assert_eq!(stats.unplaced_partners, 1);

        let json = serde_json::to_value(&stats)?;
        assert_eq!(json["direction_mode"], "export");
        assert_eq!(json["snapshot"]["aggregates"][0]["subject"], "Brazil");
        Ok(())
    }
}
