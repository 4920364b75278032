use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::App;
use crate::tui::colors;

/// Render the reference palette with swatches
pub fn render_palette_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().title(" Palette ").borders(Borders::ALL);
    let matched = app.last.as_ref().map(|r| r.name.as_str());

    let items: Vec<ListItem> = app
        .palette
        .iter()
        .map(|entry| {
            let is_match = matched == Some(entry.name.as_str());
            let name_style = if is_match {
                Style::default()
                    .fg(colors::SUCCESS)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled("  ", Style::default().bg(colors::swatch(entry.color))),
                Span::raw(" "),
                Span::styled(format!("{:<8}", entry.name), name_style),
                Span::styled(entry.color.hex(), Style::default().fg(colors::MUTED)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors::SELECTION_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, &mut app.palette_state);
}
