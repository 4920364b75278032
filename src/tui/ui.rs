use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, DialogKind, NotificationLevel};

use super::colors;
use super::widgets::{
    render_help_dialog, render_help_footer, render_history_list, render_image_view,
    render_load_image_dialog, render_palette_list, render_result_panel, render_rgb_form,
};

const TITLE: &str = "huename - RGB Color Namer";

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, app, header_area);

    let [image_area, side_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(body_area);

    render_image_view(frame, app, image_area);

    let result_height = if app.config.ui.show_distance { 6 } else { 5 };
    let palette_height = app.palette.len() as u16 + 2;
    let [form_area, result_area, palette_area, history_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(result_height),
        Constraint::Length(palette_height),
        Constraint::Fill(1),
    ])
    .areas(side_area);

    render_rgb_form(frame, app, form_area);
    render_result_panel(frame, app, result_area);
    render_palette_list(frame, app, palette_area);
    render_history_list(frame, app, history_area);

    render_help_footer(frame, app, footer_area);

    if app.has_active_dialog() {
        render_dialog(frame, app, area);
    }

    if !app.notifications.is_empty() {
        render_notifications(frame, app, area);
    }
}

/// Render header bar
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mode_str = format!("[{}]", app.mode);
    let padding = area
        .width
        .saturating_sub(TITLE.width() as u16 + mode_str.width() as u16);

    let header_text = Line::from(vec![
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding as usize)),
        Span::styled(mode_str, Style::default().fg(colors::PRIMARY)),
    ]);

    let header = Paragraph::new(header_text).style(Style::default().bg(colors::BAR_BG));
    frame.render_widget(header, area);
}

/// Render dialog overlay
fn render_dialog(frame: &mut Frame, app: &App, area: Rect) {
    match &app.dialog {
        DialogKind::None => {}
        DialogKind::LoadImage(input) => render_load_image_dialog(frame, area, input),
        DialogKind::Help => render_help_dialog(frame, app, area),
    }
}

/// Render notifications as stacked popups in bottom-right
/// Oldest at top, newest at bottom
fn render_notifications(frame: &mut Frame, app: &App, area: Rect) {
    const POPUP_WIDTH: u16 = 40;
    const POPUP_HEIGHT: u16 = 3;
    const MAX_VISIBLE: usize = 5;

    let start_idx = app.notifications.len().saturating_sub(MAX_VISIBLE);
    let visible = &app.notifications[start_idx..];
    let count = visible.len();

    for (i, notification) in visible.iter().enumerate() {
        let (label, border_color) = match notification.level {
            NotificationLevel::Info => ("INFO", colors::PRIMARY),
            NotificationLevel::Error => ("ERROR", colors::ERROR),
        };

        let slide_offset = notification.slide_offset(POPUP_WIDTH + 2);

        // i=0 is oldest (top), i=count-1 is newest (bottom)
        let y_offset = (count - 1 - i) as u16 * POPUP_HEIGHT;
        let popup_x = area.width.saturating_sub(POPUP_WIDTH + 1) + slide_offset;
        let popup_y = area.height.saturating_sub(POPUP_HEIGHT + 1 + y_offset);

        if popup_x >= area.width {
            continue;
        }

        let visible_width = area.width.saturating_sub(popup_x).min(POPUP_WIDTH);
        if visible_width == 0 {
            continue;
        }

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: visible_width,
            height: POPUP_HEIGHT,
        };

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", label))
            .title_style(
                Style::default()
                    .fg(border_color)
                    .add_modifier(Modifier::BOLD),
            );

        let max_msg_width = visible_width.saturating_sub(4) as usize;
        let msg = truncate_to_width(&notification.message, max_msg_width);
        frame.render_widget(Paragraph::new(msg).block(block), popup_area);
    }
}

/// Cut `text` to at most `max` display columns, ending with "..." when cut
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max >= 3 {
        out.push_str("...");
    }
    out
}

/// Create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, center, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center);

    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("No image loaded.", 36), "No image loaded.");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_to_width("Couldn't load image", 10), "Couldn'...");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // each CJK char is two columns
        assert_eq!(truncate_to_width("色色色色色", 7), "色色...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate_to_width("abcdef", 0), "");
    }
}
