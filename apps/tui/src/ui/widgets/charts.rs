use crate::ui::widgets::flow_map::blues;
use crate::ui::widgets::RankedFlow;
use coffee_trade::trade::scale::{format_value, value_intensity};
use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

/// Horizontal bars, one per ranked flow, in thousands of USD.
#[allow(clippy::cast_sign_loss)]
pub fn render_partner_chart(flows: &[RankedFlow], title: &str, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if flows.is_empty() {
        let paragraph = Paragraph::new("No flows to show")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let max = flows
        .iter()
        .map(|flow| flow.value)
        .fold(0.0_f64, f64::max);

    let bars: Vec<Bar<'_>> = flows
        .iter()
        .map(|flow| {
            let color = if flow.hovered {
                Color::Yellow
            } else {
                blues(value_intensity(flow.value, max))
            };
            Bar::default()
                .value(flow.value.round().max(0.0) as u64)
                .label(TextLine::from(flow.label.as_str()))
                .text_value(format_value(flow.value))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .max(max.round().max(1.0) as u64)
        .bar_width(1)
        .bar_gap(0);

    f.render_widget(chart, area);
}
