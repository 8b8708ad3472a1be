use crate::ui::widgets::RankedFlow;
use coffee_trade::trade::scale::format_value;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

/// Ranked flows with their share of the listed total. The hovered row is
/// highlighted and kept in view.
pub fn render_flow_table(flows: &[RankedFlow], title: &str, f: &mut Frame<'_>, area: Rect) {
    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Partner"),
        Cell::from("Value (USD)"),
        Cell::from("Share"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total: f64 = flows.iter().map(|flow| flow.value).sum();
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let selected = flows.iter().position(|flow| flow.hovered).unwrap_or(0);
    let offset = scroll_offset(flows.len(), max_visible_rows, selected);

    let rows = flows
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, flow)| {
            let style = if flow.hovered {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let share = if total > 0.0 {
                format!("{:.1}%", flow.value / total * 100.0)
            } else {
                String::new()
            };

            Row::new(vec![
                Cell::from((index + 1).to_string()),
                Cell::from(flow.label.clone()),
                Cell::from(format_value(flow.value)),
                Cell::from(share),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(3),
        Constraint::Min(12),
        Constraint::Length(12),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" {title} ({}) ", flows.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_visible() {
        assert_eq!(scroll_offset(5, 10, 4), 0);
        assert_eq!(scroll_offset(20, 5, 2), 0);
        assert_eq!(scroll_offset(20, 5, 5), 1);
        assert_eq!(scroll_offset(20, 5, 19), 15);
    }
}
