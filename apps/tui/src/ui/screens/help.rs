use crate::ui::widgets::popup::open_popup;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help_popup(f: &mut Frame<'_>) {
    let popup_area = open_popup(f, 70, 70);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(Span::styled(
        "Press F1 or Esc to close",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

fn shortcut(key: &'static str, description: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key:<8}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ])
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    vec![
        TextLine::from(Span::styled(
            "Coffee Trade Flows",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Arrows run from exporter to importer. Colour and thickness follow the traded value.",
        ),
        TextLine::from(
            "With nothing hovered each country shows its top partners; hovering a country shows more of its partners.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        shortcut("Mouse", "Hover a country dot or an arrow on the map"),
        shortcut("Up/Down", "Previous / next country"),
        shortcut("Left/Right", "Previous / next flow of the hovered country"),
        shortcut("Esc", "Leave the hovered flow, then the hovered country"),
        shortcut("m", "Switch between importers and exporters"),
        shortcut("[ ]", "Previous / next year"),
        shortcut("/", "Search for a country"),
        shortcut("F1", "Toggle this help"),
        shortcut("q", "Quit"),
    ]
}
