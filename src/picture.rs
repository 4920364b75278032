use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::color::Rgb;
use crate::error::{Error, Result};

/// A decoded raster image that pixels can be sampled from
#[derive(Debug, Clone)]
pub struct Picture {
    pixels: RgbaImage,
    path: Option<PathBuf>,
}

impl Picture {
    /// Decode an image file (PNG, JPEG, GIF, BMP)
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let pixels = image::open(path)?.to_rgba8();
        tracing::info!(
            "Loaded image {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );
        Ok(Self {
            pixels,
            path: Some(path.to_path_buf()),
        })
    }

    /// Wrap already decoded pixels
    pub fn from_pixels(pixels: RgbaImage) -> Self {
        Self { pixels, path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height()
    }

    /// Color of one pixel with alpha discarded
    pub fn sample(&self, x: u32, y: u32) -> Result<Rgb> {
        let (width, height) = self.dimensions();
        self.pixels
            .get_pixel_checked(x, y)
            .map(|p| Rgb::from_rgba(p.0))
            .ok_or(Error::PixelOutOfBounds {
                x,
                y,
                width,
                height,
            })
    }
}
