use crate::app::App;
use crate::ui::widgets::charts::render_partner_chart;
use crate::ui::widgets::flow_map::{render_flow_map, MapViewport};
use crate::ui::widgets::tables::render_flow_table;
use crate::ui::widgets::ranked_flows;
use coffee_trade::domain::DirectionMode;
use coffee_trade::trade::scale::{format_value, format_weight};
use coffee_trade::trade::{InteractionPhase, TradeController};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

const CHART_ROWS: usize = 10;

/// Screen regions of the dashboard. Shared with pointer hit-testing so
/// the map is hit where it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub title: Rect,
    pub map: Rect,
    pub chart: Rect,
    pub table: Rect,
    pub status: Rect,
    pub shortcuts: Rect,
}

pub fn dashboard_layout(area: Rect) -> DashboardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Map and side panel
            Constraint::Length(3), // Status / tooltip
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area.inner(Margin::new(2, 1)));

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(content[1]);

    DashboardLayout {
        title: rows[0],
        map: content[0],
        chart: side[0],
        table: side[1],
        status: rows[2],
        shortcuts: rows[3],
    }
}

/// Drawable part of the map panel, inside its border.
pub fn map_viewport(area: Rect) -> MapViewport {
    MapViewport::new(dashboard_layout(area).map.inner(Margin::new(1, 1)))
}

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let layout = dashboard_layout(f.area());
    let controller = app.controller.as_ref();

    render_title_section(controller, f, layout.title);
    render_map_section(app, f, layout.map);

    let flows = controller.map(ranked_flows).unwrap_or_default();
    let chart_title = side_panel_title(controller);
    let chart_flows = &flows[..flows.len().min(CHART_ROWS)];
    render_partner_chart(chart_flows, &chart_title, f, layout.chart);
    render_flow_table(&flows, &chart_title, f, layout.table);

    render_status_section(app, f, layout.status);
    render_shortcuts(f, layout.shortcuts);
}

fn render_title_section(controller: Option<&TradeController>, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== Coffee Trade Flows ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = title_block.inner(area);
    f.render_widget(title_block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let mode = controller.map_or(DirectionMode::Import, |c| c.state().direction_mode);
    let modes = [DirectionMode::Import, DirectionMode::Export];
    let tabs = Tabs::new(modes.iter().map(|mode| TextLine::from(mode.label())))
        .select(modes.iter().position(|candidate| *candidate == mode).unwrap_or(0))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));
    f.render_widget(tabs, columns[0]);

    let summary = controller.map_or_else(
        || TextLine::from(Span::styled("No data", Style::default().fg(Color::Gray))),
        |controller| {
            let year = controller
                .year()
                .map_or_else(|| "-".to_string(), |year| year.to_string());
            TextLine::from(vec![
                Span::styled("Year ", Style::default().fg(Color::Gray)),
                Span::styled(
                    year,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Flows ", Style::default().fg(Color::Gray)),
                Span::styled(
                    controller.flow_edges().len().to_string(),
                    Style::default().fg(Color::White),
                ),
                Span::styled("  ", Style::default()),
                Span::styled(
                    phase_label(&controller.phase()),
                    Style::default().fg(Color::Yellow),
                ),
            ])
        },
    );
    f.render_widget(Paragraph::new(summary).alignment(Alignment::Right), columns[1]);
}

fn render_map_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Flow Map ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    if let Some(error) = &app.load_error {
        let banner = Paragraph::new(Text::from(vec![
            TextLine::from(Span::styled(
                "Failed to load trade data",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            TextLine::from(""),
            TextLine::from(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            TextLine::from(""),
            TextLine::from(Span::styled(
                format!(
                    "Set TRADE_DATA or pass --data (currently {})",
                    app.config.data_path.display()
                ),
                Style::default().fg(Color::Gray),
            )),
        ]))
        .block(block.border_style(Style::default().fg(Color::Red)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(banner, area);
        return;
    }

    match &app.controller {
        Some(controller) => render_flow_map(controller, f, area, block),
        None => {
            let loading = Paragraph::new("Loading trade data...")
                .block(block)
                .alignment(Alignment::Center);
            f.render_widget(loading, area);
        }
    }
}

fn side_panel_title(controller: Option<&TradeController>) -> String {
    let Some(controller) = controller else {
        return "Top Flows".to_string();
    };
    let state = controller.state();
    match &state.hovered_country {
        Some(country) => {
            let partners = match state.direction_mode {
                DirectionMode::Export => "Buyers",
                DirectionMode::Import => "Suppliers",
            };
            format!("{country}: {partners}")
        }
        None => format!("Top Flows by {}", state.direction_mode.label()),
    }
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = app
        .controller
        .as_ref()
        .and_then(tooltip_line)
        .unwrap_or_else(|| {
            if app.status_message.is_empty() {
                TextLine::from(Span::styled(
                    idle_hint(&app.phase()),
                    Style::default().fg(Color::Gray),
                ))
            } else {
                TextLine::from(Span::styled(
                    app.status_message.clone(),
                    Style::default().fg(Color::Green),
                ))
            }
        });

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

/// Tooltip for the hovered edge: from, to, value and weight.
fn tooltip_line(controller: &TradeController) -> Option<TextLine<'static>> {
    let edge = controller.hovered_flow()?;
    let weight = controller.flow_weight(&edge.exporter, &edge.importer);
    let label = Style::default().fg(Color::Gray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled("From ", label),
        Span::styled(edge.exporter.clone(), value),
        Span::styled(" to ", label),
        Span::styled(edge.importer.clone(), value),
        Span::styled("  Value ", label),
        Span::styled(format!("{} USD", format_value(edge.value)), value),
    ];
    if weight > 0.0 {
        spans.push(Span::styled("  Weight ", label));
        spans.push(Span::styled(format!("{} t", format_weight(weight)), value));
    }
    Some(TextLine::from(spans))
}

fn phase_label(phase: &InteractionPhase) -> String {
    match phase {
        InteractionPhase::Idle => "Overview".to_string(),
        InteractionPhase::CountryHovered(country) => country.clone(),
        InteractionPhase::EdgeHovered {
            exporter, importer, ..
        } => format!("{exporter} → {importer}"),
    }
}

fn idle_hint(phase: &InteractionPhase) -> &'static str {
    match phase {
        InteractionPhase::Idle => "Hover a country on the map or use Up/Down to pick one",
        InteractionPhase::CountryHovered(_) => "Hover an arrow or use Left/Right to inspect a flow",
        InteractionPhase::EdgeHovered { .. } => "",
    }
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Color::Gray);

    let mut spans = Vec::new();
    for (index, (shortcut, action)) in [
        ("F1", "Help"),
        ("↑/↓", "Country"),
        ("←/→", "Flow"),
        ("m", "Mode"),
        ("[/]", "Year"),
        ("/", "Search"),
        ("Esc", "Leave"),
        ("q", "Quit"),
    ]
    .into_iter()
    .enumerate()
    {
        if index > 0 {
            spans.push(Span::styled(" | ", text));
        }
        spans.push(Span::styled(shortcut, key));
        spans.push(Span::styled(format!(": {action}"), text));
    }

    f.render_widget(
        Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center),
        area,
    );
}
