use std::fmt;

/// One of the three color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Short label used in forms ("R", "G", "B")
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Channel::Red => Channel::Green,
            Channel::Green => Channel::Blue,
            Channel::Blue => Channel::Red,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Channel::Red => Channel::Blue,
            Channel::Green => Channel::Red,
            Channel::Blue => Channel::Green,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// An RGB triple.
///
/// Components are nominally in `0..=255` but stored as `i32` so that
/// classification stays defined for any value a caller passes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Rgb {
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Build from a sampled RGBA pixel, dropping alpha
    pub fn from_rgba([red, green, blue, _alpha]: [u8; 4]) -> Self {
        Self::new(red.into(), green.into(), blue.into())
    }

    pub fn channel(&self, channel: Channel) -> i32 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// True when every component is within `0..=255`
    pub fn in_gamut(&self) -> bool {
        Channel::ALL
            .iter()
            .all(|&c| (0..=255).contains(&self.channel(c)))
    }

    /// Components clamped into displayable bytes
    pub fn to_bytes(&self) -> [u8; 3] {
        let clamp = |v: i32| v.clamp(0, 255) as u8;
        [clamp(self.red), clamp(self.green), clamp(self.blue)]
    }

    /// `#RRGGBB` of the clamped components
    pub fn hex(&self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Perceived brightness in `0.0..=255.0`, used to pick readable text over a swatch
    pub fn luma(&self) -> f64 {
        let [r, g, b] = self.to_bytes();
        0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red.into(), green.into(), blue.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_discards_alpha() {
        let opaque = Rgb::from_rgba([10, 20, 30, 255]);
        let clear = Rgb::from_rgba([10, 20, 30, 0]);
        assert_eq!(opaque, clear);
        assert_eq!(opaque, Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_in_gamut() {
        assert!(Rgb::new(0, 128, 255).in_gamut());
        assert!(!Rgb::new(-1, 0, 0).in_gamut());
        assert!(!Rgb::new(0, 0, 256).in_gamut());
    }

    #[test]
    fn test_hex_clamps() {
        assert_eq!(Rgb::new(255, 165, 0).hex(), "#FFA500");
        assert_eq!(Rgb::new(300, -5, 16).hex(), "#FF0010");
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "(1, 2, 3)");
    }

    #[test]
    fn test_channel_cycle() {
        assert_eq!(Channel::Red.next(), Channel::Green);
        assert_eq!(Channel::Blue.next(), Channel::Red);
        assert_eq!(Channel::Red.prev(), Channel::Blue);
        assert_eq!(Channel::Green.prev(), Channel::Red);
    }
}
