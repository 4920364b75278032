use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Mode};
use crate::color::Channel;
use crate::tui::colors;

/// Render the R/G/B text fields
pub fn render_rgb_form(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == Mode::Insert;

    let block = Block::default()
        .title(" RGB ")
        .borders(Borders::ALL)
        .border_style(if editing {
            Style::default().fg(colors::BORDER_FOCUS)
        } else {
            Style::default().fg(colors::BORDER)
        });

    let lines: Vec<Line> = Channel::ALL
        .iter()
        .map(|&channel| {
            let focused = editing && app.form.focus == channel;
            let marker = if focused { "> " } else { "  " };
            let label_style = if focused {
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::MUTED)
            };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(colors::PRIMARY)),
                Span::styled(format!("{}: ", channel.label()), label_style),
                Span::raw(app.form.field(channel).to_string()),
            ];
            if focused {
                spans.push(Span::styled("│", Style::default().fg(colors::PRIMARY)));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
