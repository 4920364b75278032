use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::config::KeyBinding;
use crate::tui::colors;
use crate::tui::ui::centered_rect;

/// Render every active key binding, grouped by mode
pub fn render_help_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let dialog_area = centered_rect(60, 80, area);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Key Bindings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER_FOCUS));

    let mut lines = Vec::new();
    for group in ["Any", "Normal", "Insert", "Pick", "Dialog"] {
        let bindings: Vec<&KeyBinding> = app
            .config
            .bindings
            .iter()
            .filter(|b| b.mode.as_deref().unwrap_or("Any") == group)
            .collect();
        if bindings.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(
            group,
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        for binding in bindings {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<14}", key_label(binding)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(binding.action.clone(), Style::default().fg(colors::MUTED)),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), dialog_area);
}

fn key_label(binding: &KeyBinding) -> String {
    match &binding.mods {
        Some(mods) => format!("{}+{}", mods, binding.key),
        None => binding.key.clone(),
    }
}
