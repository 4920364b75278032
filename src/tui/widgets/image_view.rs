use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Mode};
use crate::color::Rgb;
use crate::picture::Picture;
use crate::tui::colors;

/// Mapping between terminal cells and image pixels.
///
/// Each cell draws two vertically stacked samples with a half block, so a
/// cell covers `scale` pixels horizontally and `2 * scale` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scale: u32,
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    /// Largest integer downscale that fits the image into `cols` x `rows` cells
    pub fn fit((width, height): (u32, u32), cols: u16, rows: u16) -> Option<Self> {
        if cols == 0 || rows == 0 || width == 0 || height == 0 {
            return None;
        }
        let scale = width
            .div_ceil(u32::from(cols))
            .max(height.div_ceil(u32::from(rows) * 2))
            .max(1);
        Some(Self {
            scale,
            cols: width.div_ceil(scale).min(u32::from(cols)) as u16,
            rows: height.div_ceil(scale * 2).min(u32::from(rows)) as u16,
        })
    }

    /// Cell containing pixel (x, y)
    pub fn cell_of(&self, x: u32, y: u32) -> (u16, u16) {
        ((x / self.scale) as u16, (y / (self.scale * 2)) as u16)
    }

    /// Pixel drawn in the upper or lower half of a cell
    pub fn pixel_at(&self, col: u16, row: u16, lower: bool) -> (u32, u32) {
        let y = u32::from(row) * 2 + u32::from(lower);
        (u32::from(col) * self.scale, y * self.scale)
    }
}

/// Render the loaded image, or a hint when none is loaded
pub fn render_image_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(picture) = &app.picture else {
        let block = Block::default().title(" Image ").borders(Borders::ALL);
        let hint = Paragraph::new(vec![
            Line::from("No image loaded."),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("o", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" to open one."),
            ]),
        ])
        .block(block)
        .style(Style::default().fg(colors::MUTED));
        frame.render_widget(hint, area);
        return;
    };

    let picking = app.mode == Mode::Pick;
    let name = picture
        .path()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let mut block = Block::default()
        .title(format!(" {} ({}x{}) ", name, picture.width(), picture.height()))
        .borders(Borders::ALL)
        .border_style(if picking {
            Style::default().fg(colors::BORDER_FOCUS)
        } else {
            Style::default()
        });
    if picking {
        block = block.title_bottom(cursor_status(app, picture));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(viewport) = Viewport::fit(picture.dimensions(), inner.width, inner.height) else {
        return;
    };

    let buf = frame.buffer_mut();
    for row in 0..viewport.rows {
        for col in 0..viewport.cols {
            let (tx, ty) = viewport.pixel_at(col, row, false);
            let (bx, by) = viewport.pixel_at(col, row, true);
            let top = sample_color(picture, tx, ty).unwrap_or(Color::Reset);
            let bottom = sample_color(picture, bx, by).unwrap_or(Color::Reset);
            if let Some(cell) = buf.cell_mut((inner.x + col, inner.y + row)) {
                cell.set_symbol("▀").set_fg(top).set_bg(bottom);
            }
        }
    }

    if picking {
        let (x, y) = app.cursor;
        let (col, row) = viewport.cell_of(x, y);
        let under = picture.sample(x, y).unwrap_or_default();
        if let Some(cell) = buf.cell_mut((inner.x + col, inner.y + row)) {
            cell.set_symbol("+")
                .set_fg(colors::contrast(under))
                .set_bg(colors::swatch(under))
                .set_style(Style::default().add_modifier(Modifier::BOLD));
        }
    }
}

fn sample_color(picture: &Picture, x: u32, y: u32) -> Option<Color> {
    picture.sample(x, y).ok().map(colors::swatch)
}

fn cursor_status(app: &App, picture: &Picture) -> Line<'static> {
    let (x, y) = app.cursor;
    let color: Rgb = picture.sample(x, y).unwrap_or_default();
    Line::from(vec![
        Span::styled(
            format!(" x={} y={} ", x, y),
            Style::default().fg(colors::HIGHLIGHT),
        ),
        Span::styled("  ", Style::default().bg(colors::swatch(color))),
        Span::raw(format!(" {} ", color)),
    ])
}
