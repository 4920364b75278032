use std::sync::OnceLock;

use crate::error::{Error, Result};

use super::Rgb;

/// A named reference color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: String,
    pub color: Rgb,
}

/// Ordered, read-only set of named reference colors.
///
/// Order is significant: the classifier resolves exact ties in favor of the
/// entry declared first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

const STANDARD: [(&str, Rgb); 11] = [
    ("Red", Rgb::new(255, 0, 0)),
    ("Green", Rgb::new(0, 255, 0)),
    ("Blue", Rgb::new(0, 0, 255)),
    ("Yellow", Rgb::new(255, 255, 0)),
    ("Cyan", Rgb::new(0, 255, 255)),
    ("Magenta", Rgb::new(255, 0, 255)),
    ("Black", Rgb::new(0, 0, 0)),
    ("White", Rgb::new(255, 255, 255)),
    ("Gray", Rgb::new(128, 128, 128)),
    ("Orange", Rgb::new(255, 165, 0)),
    ("Pink", Rgb::new(255, 192, 203)),
];

impl Palette {
    /// Build a palette from entries in the given order. Names must be unique.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Rgb)>,
        S: Into<String>,
    {
        let mut built: Vec<PaletteEntry> = Vec::new();
        for (name, color) in entries {
            let name = name.into();
            if built.iter().any(|e| e.name == name) {
                return Err(Error::DuplicateColorName(name));
            }
            built.push(PaletteEntry { name, color });
        }
        Ok(Self { entries: built })
    }

    /// A palette with no entries
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The fixed 11-color palette, built once per process
    pub fn standard() -> &'static Palette {
        static STANDARD_PALETTE: OnceLock<Palette> = OnceLock::new();
        STANDARD_PALETTE.get_or_init(|| Palette {
            entries: STANDARD
                .iter()
                .map(|&(name, color)| PaletteEntry {
                    name: name.to_string(),
                    color,
                })
                .collect(),
        })
    }

    /// All entries in declared order
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a color by exact name
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.color)
    }

    /// Index of an entry by exact name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
