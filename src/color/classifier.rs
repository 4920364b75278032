use crate::error::{Error, Result};

use super::{Palette, Rgb};

/// The palette entry closest to a target color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub name: &'a str,
    pub color: Rgb,
    pub distance: f64,
}

/// Euclidean distance between two colors in RGB space
pub fn distance(a: Rgb, b: Rgb) -> f64 {
    (distance_squared(a, b) as f64).sqrt()
}

// Wide enough for any pair of i32 components.
fn distance_squared(a: Rgb, b: Rgb) -> i128 {
    let dr = i128::from(b.red) - i128::from(a.red);
    let dg = i128::from(b.green) - i128::from(a.green);
    let db = i128::from(b.blue) - i128::from(a.blue);
    dr * dr + dg * dg + db * db
}

/// Find the palette entry nearest to `target`.
///
/// Entries are scanned in declared order and only a strictly smaller distance
/// replaces the current best, so the first declared entry wins exact ties.
pub fn nearest(target: Rgb, palette: &Palette) -> Result<Match<'_>> {
    let mut best: Option<(&str, Rgb, i128)> = None;

    for entry in palette {
        let d = distance_squared(target, entry.color);
        if best.map_or(true, |(_, _, min)| d < min) {
            best = Some((entry.name.as_str(), entry.color, d));
        }
    }

    let (name, color, squared) = best.ok_or(Error::EmptyPalette)?;
    Ok(Match {
        name,
        color,
        distance: (squared as f64).sqrt(),
    })
}

/// Name of the palette entry nearest to `target`
pub fn classify(target: Rgb, palette: &Palette) -> Result<&str> {
    nearest(target, palette).map(|m| m.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> &'static Palette {
        Palette::standard()
    }

    #[test]
    fn test_exact_entries_classify_to_themselves() {
        for entry in standard() {
            let m = nearest(entry.color, standard()).unwrap();
            assert_eq!(m.name, entry.name);
            assert_eq!(m.distance, 0.0);
        }
    }

    #[test]
    fn test_black_and_white() {
        assert_eq!(classify(Rgb::new(0, 0, 0), standard()).unwrap(), "Black");
        assert_eq!(
            classify(Rgb::new(255, 255, 255), standard()).unwrap(),
            "White"
        );
    }

    #[test]
    fn test_near_red() {
        assert_eq!(classify(Rgb::new(254, 1, 1), standard()).unwrap(), "Red");
    }

    #[test]
    fn test_near_gray() {
        assert_eq!(
            classify(Rgb::new(130, 130, 130), standard()).unwrap(),
            "Gray"
        );
    }

    #[test]
    fn test_near_orange_and_pink() {
        assert_eq!(
            classify(Rgb::new(250, 160, 10), standard()).unwrap(),
            "Orange"
        );
        assert_eq!(
            classify(Rgb::new(255, 190, 200), standard()).unwrap(),
            "Pink"
        );
    }

    #[test]
    fn test_out_of_range_is_still_classified() {
        assert_eq!(classify(Rgb::new(-50, -50, -50), standard()).unwrap(), "Black");
        assert_eq!(classify(Rgb::new(400, 0, 0), standard()).unwrap(), "Red");
        assert_eq!(
            classify(Rgb::new(i32::MAX, i32::MIN, 0), standard()).unwrap(),
            "Red"
        );
    }

    #[test]
    fn test_empty_palette_errors() {
        let empty = Palette::empty();
        let result = classify(Rgb::new(0, 0, 0), &empty);
        assert!(matches!(result, Err(Error::EmptyPalette)));
    }

    #[test]
    fn test_tie_resolves_to_first_declared() {
        let first = Palette::new([("Low", Rgb::new(0, 0, 0)), ("High", Rgb::new(20, 0, 0))])
            .unwrap();
        let second = Palette::new([("High", Rgb::new(20, 0, 0)), ("Low", Rgb::new(0, 0, 0))])
            .unwrap();
        let midpoint = Rgb::new(10, 0, 0);
        assert_eq!(classify(midpoint, &first).unwrap(), "Low");
        assert_eq!(classify(midpoint, &second).unwrap(), "High");
    }

    #[test]
    fn test_distance_properties() {
        let samples = [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(12, 200, 77),
            Rgb::new(-3, 300, 128),
        ];
        for &a in &samples {
            assert_eq!(distance(a, a), 0.0);
            for &b in &samples {
                assert_eq!(distance(a, b), distance(b, a));
            }
        }
    }

    #[test]
    fn test_distance_value() {
        assert_eq!(distance(Rgb::new(0, 0, 0), Rgb::new(3, 4, 0)), 5.0);
        let d = distance(Rgb::new(254, 1, 1), Rgb::new(255, 0, 0));
        assert!((d - 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_reports_distance() {
        let m = nearest(Rgb::new(130, 130, 130), standard()).unwrap();
        assert_eq!(m.color, Rgb::new(128, 128, 128));
        assert!((m.distance - 12f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let target = Rgb::new(90, 40, 200);
        let a = classify(target, standard()).unwrap();
        let b = classify(target, standard()).unwrap();
        assert_eq!(a, b);
    }
}
