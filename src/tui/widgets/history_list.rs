use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Source};
use crate::tui::colors;

/// Render recent classifications, newest first
pub fn render_history_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" History ").borders(Borders::ALL);

    if app.history.is_empty() {
        let empty = Paragraph::new("Nothing classified yet")
            .block(block)
            .style(Style::default().fg(colors::MUTED));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .history
        .iter()
        .map(|r| {
            let origin = match r.source {
                Source::Input => "typed".to_string(),
                Source::Pixel { x, y } => format!("@{},{}", x, y),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    r.at.format("%H:%M:%S ").to_string(),
                    Style::default().fg(colors::MUTED),
                ),
                Span::styled("  ", Style::default().bg(colors::swatch(r.color))),
                Span::raw(format!(" {} ", r.color)),
                Span::styled(format!("{} ", r.name), Style::default().fg(colors::PRIMARY)),
                Span::styled(origin, Style::default().fg(colors::MUTED)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
