use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::PathInput;
use crate::tui::colors;
use crate::tui::ui::centered_rect;

/// Render the load-image dialog (path prompt plus completion candidates)
pub fn render_load_image_dialog(frame: &mut Frame, area: Rect, input: &PathInput) {
    let dialog_area = centered_rect(60, 40, area);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Load Image ")
        .title_bottom(Line::from(Span::styled(
            " Tab: complete  Enter: open  Esc: cancel ",
            Style::default().fg(colors::MUTED),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER_FOCUS));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let [input_area, separator_area, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(colors::PRIMARY)),
        Span::raw(input.path.as_str()),
        Span::styled("│", Style::default().fg(colors::PRIMARY)),
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    let separator = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER_FOCUS));
    frame.render_widget(separator, separator_area);

    let items: Vec<ListItem> = input
        .candidates
        .iter()
        .map(|c| ListItem::new(format!("  {}", c)).style(Style::default().fg(colors::MUTED)))
        .collect();
    frame.render_widget(List::new(items), list_area);
}
