pub mod action;
pub mod app;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod picture;
pub mod tui;

pub use app::App;
pub use color::{classify, distance, nearest, Palette, Rgb};
pub use config::Config;
pub use error::{Error, Result};
pub use picture::Picture;
