use crate::app::App;
use crate::ui::widgets::popup::open_popup;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn render_search(app: &App, f: &mut Frame<'_>) {
    let popup_area = open_popup(f, 50, 60);

    let block = Block::default()
        .title("== Find Country ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let input = Paragraph::new(TextLine::from(Span::styled(
        format!("> {}█", app.search_query),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(input, chunks[0]);

    if app.search_results.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No matching countries", Style::default().fg(Color::Gray))),
            chunks[1],
        );
    } else {
        let items: Vec<ListItem<'_>> = app
            .search_results
            .iter()
            .map(|country| ListItem::new(country.as_str()))
            .collect();
        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(app.search_selection));
        f.render_stateful_widget(list, chunks[1], &mut state);
    }

    f.render_widget(
        Paragraph::new(Span::styled(
            "Enter: hover country | Up/Down: select | Esc: cancel",
            Style::default().fg(Color::Gray),
        )),
        chunks[2],
    );
}
