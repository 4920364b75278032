//! UI chrome colors.
//!
//! Chrome uses the 256-color palette for broad terminal compatibility;
//! swatches of classified colors are drawn in true color via [`swatch`].

use ratatui::style::Color;

use crate::color::Rgb;

/// Primary accent color (cyan-like)
pub const PRIMARY: Color = Color::Indexed(73); // Steel blue

/// Secondary/muted text color
pub const MUTED: Color = Color::Indexed(243); // Gray

/// Background for selected items
pub const SELECTION_BG: Color = Color::Indexed(236); // Dark gray

/// Highlight color (yellow-like)
pub const HIGHLIGHT: Color = Color::Indexed(179); // Light goldenrod

/// Error/danger color
pub const ERROR: Color = Color::Indexed(167); // Indian red

/// Success color
pub const SUCCESS: Color = Color::Indexed(108); // Dark sea green

/// Header/footer background
pub const BAR_BG: Color = Color::Indexed(236); // Dark gray

/// Border color for dialogs
pub const BORDER: Color = Color::Indexed(243); // Gray

/// Border color for focused/active elements
pub const BORDER_FOCUS: Color = Color::Indexed(73); // Steel blue

/// True-color rendition of an RGB value
pub fn swatch(color: Rgb) -> Color {
    let [r, g, b] = color.to_bytes();
    Color::Rgb(r, g, b)
}

/// Black or white, whichever reads better on top of `color`
pub fn contrast(color: Rgb) -> Color {
    if color.luma() > 140.0 {
        Color::Black
    } else {
        Color::White
    }
}
