use thiserror::Error;

use crate::color::Channel;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid {channel} value: {value:?} is not an integer")]
    InvalidInput { channel: Channel, value: String },

    #[error("{channel} value {value} is outside 0..=255")]
    ComponentOutOfRange { channel: Channel, value: i32 },

    #[error("Palette has no entries")]
    EmptyPalette,

    #[error("Duplicate color name in palette: {0}")]
    DuplicateColorName(String),

    #[error("No image loaded")]
    NoImageLoaded,

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid key binding: {0}")]
    InvalidKeyBinding(String),

    #[error("Background task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
