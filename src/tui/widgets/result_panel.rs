use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::tui::colors;

/// Render the latest classification
pub fn render_result_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Result ").borders(Borders::ALL);

    let label = Line::from(Span::styled(
        app.result_label(),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let Some(last) = &app.last else {
        let paragraph = Paragraph::new(vec![label])
            .block(block)
            .style(Style::default().fg(colors::MUTED));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        label,
        Line::from(vec![
            Span::styled("Input:   ", Style::default().fg(colors::MUTED)),
            Span::styled("    ", Style::default().bg(colors::swatch(last.color))),
            Span::raw(format!(" {} {}", last.color, last.color.hex())),
        ]),
        Line::from(vec![
            Span::styled("Match:   ", Style::default().fg(colors::MUTED)),
            Span::styled("    ", Style::default().bg(colors::swatch(last.matched))),
            Span::raw(format!(" {} {}", last.matched, last.matched.hex())),
        ]),
    ];

    if app.config.ui.show_distance {
        lines.push(Line::from(vec![
            Span::styled("Distance: ", Style::default().fg(colors::MUTED)),
            Span::styled(
                format!("{:.2}", last.distance),
                Style::default().fg(colors::HIGHLIGHT),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
