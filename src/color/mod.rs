//! Color model and nearest-color classification

mod classifier;
mod palette;
mod rgb;

pub use classifier::{classify, distance, nearest, Match};
pub use palette::{Palette, PaletteEntry};
pub use rgb::{Channel, Rgb};
