use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, DialogKind, Mode};
use crate::tui::colors;

/// Render the help footer widget
pub fn render_help_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match (app.mode, &app.dialog) {
        (Mode::Normal, _) => normal_mode_help(),
        (Mode::Insert, _) => insert_mode_help(),
        (Mode::Pick, _) => pick_mode_help(),
        (Mode::Dialog, DialogKind::LoadImage(_)) => load_dialog_help(),
        (Mode::Dialog, _) => vec![("Esc", "Close")],
    };

    let spans: Vec<Span> = help_text
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(*key, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": "),
                Span::styled(*desc, Style::default().fg(colors::MUTED)),
                Span::raw("  "),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::BAR_BG));
    frame.render_widget(paragraph, area);
}

fn normal_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("i", "Edit RGB"),
        ("Enter", "Recognize"),
        ("o", "Open Image"),
        ("p", "Pick Pixel"),
        ("j/k", "Palette"),
        ("u", "Use Color"),
        ("?", "Keys"),
        ("q", "Quit"),
    ]
}

fn insert_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Tab/S-Tab", "Field"),
        ("Enter", "Recognize"),
        ("C-u", "Clear"),
        ("Esc", "Done"),
    ]
}

fn pick_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("h/j/k/l", "Move"),
        ("H/J/K/L", "Jump"),
        ("Enter", "Pick"),
        ("Esc", "Cancel"),
    ]
}

fn load_dialog_help() -> Vec<(&'static str, &'static str)> {
    vec![("Tab", "Complete"), ("Enter", "Open"), ("Esc", "Cancel")]
}
