//! Command-line interface

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::color::{nearest, Match, Palette};
use crate::error::Result;
use crate::input::parse_rgb;
use crate::picture::Picture;

#[derive(Debug, Parser)]
#[command(
    name = "huename",
    version,
    about = "Name the closest predefined color for an RGB value or an image pixel"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive terminal UI (default)
    Tui {
        /// Image to load on startup
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Print the palette color closest to an RGB value
    #[command(allow_negative_numbers = true)]
    Classify {
        #[arg(allow_hyphen_values = true)]
        red: String,
        #[arg(allow_hyphen_values = true)]
        green: String,
        #[arg(allow_hyphen_values = true)]
        blue: String,
        /// Also print the distance to the matched color
        #[arg(long)]
        distance: bool,
    },
    /// Sample one pixel of an image and print the closest palette color
    Pick {
        image: PathBuf,
        x: u32,
        y: u32,
        /// Also print the sampled value and the distance
        #[arg(long)]
        distance: bool,
    },
    /// List the reference palette
    Palette,
}

fn write_match(out: &mut impl Write, found: &Match<'_>, distance: bool) -> Result<()> {
    if distance {
        writeln!(out, "{} {:.2}", found.name, found.distance)?;
    } else {
        writeln!(out, "{}", found.name)?;
    }
    Ok(())
}

/// `huename classify R G B`
pub fn classify(
    out: &mut impl Write,
    red: &str,
    green: &str,
    blue: &str,
    distance: bool,
) -> Result<()> {
    let color = parse_rgb(red, green, blue)?;
    let found = nearest(color, Palette::standard())?;
    tracing::debug!("{} -> {}", color, found.name);
    write_match(out, &found, distance)
}

/// `huename pick IMAGE X Y`
pub fn pick(out: &mut impl Write, image: &Path, x: u32, y: u32, distance: bool) -> Result<()> {
    let picture = Picture::open(image)?;
    let color = picture.sample(x, y)?;
    let found = nearest(color, Palette::standard())?;
    tracing::debug!("pixel ({}, {}) {} -> {}", x, y, color, found.name);
    if distance {
        write!(out, "{} ", color)?;
    }
    write_match(out, &found, distance)
}

/// `huename palette`
pub fn palette(out: &mut impl Write) -> Result<()> {
    for entry in Palette::standard() {
        writeln!(
            out,
            "{:<8} {:>3} {:>3} {:>3}  {}",
            entry.name,
            entry.color.red,
            entry.color.green,
            entry.color.blue,
            entry.color.hex()
        )?;
    }
    Ok(())
}
