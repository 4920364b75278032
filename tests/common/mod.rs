//! Common test utilities
#![allow(dead_code)]

use std::path::PathBuf;

use huename::app::App;
use huename::config::Config;
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

/// A PNG written into a temporary directory
pub struct TestImage {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestImage {
    /// 4x2 image: top row red, green, blue, white; bottom row black, gray,
    /// orange, half-transparent pink
    pub fn new() -> Self {
        let mut pixels = RgbaImage::new(4, 2);
        let row0 = [
            [254, 1, 1, 255],
            [0, 250, 5, 255],
            [3, 3, 252, 255],
            [255, 255, 255, 255],
        ];
        let row1 = [
            [0, 0, 0, 255],
            [130, 130, 130, 255],
            [255, 165, 0, 255],
            [255, 192, 203, 64],
        ];
        for (x, (top, bottom)) in row0.iter().zip(row1.iter()).enumerate() {
            pixels.put_pixel(x as u32, 0, Rgba(*top));
            pixels.put_pixel(x as u32, 1, Rgba(*bottom));
        }
        Self::from_pixels("sample.png", &pixels)
    }

    pub fn from_pixels(name: &str, pixels: &RgbaImage) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(name);
        pixels.save(&path).expect("Failed to write test image");
        Self { dir, path }
    }

    pub fn path_string(&self) -> String {
        self.path.display().to_string()
    }
}

impl Default for TestImage {
    fn default() -> Self {
        Self::new()
    }
}

/// App with default configuration
pub fn test_app() -> App {
    App::new(Config::default())
}
