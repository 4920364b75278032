//! Tests for nearest-color classification through the public API

use huename::color::{classify, distance, nearest, Palette, Rgb};
use huename::Error;

// ===================
// Known values
// ===================

#[test]
fn test_every_entry_classifies_to_itself() {
    let palette = Palette::standard();
    for entry in palette.entries() {
        assert_eq!(classify(entry.color, palette).unwrap(), entry.name);
    }
}

#[test]
fn test_black_white_red_gray() {
    let palette = Palette::standard();
    assert_eq!(classify(Rgb::new(0, 0, 0), palette).unwrap(), "Black");
    assert_eq!(classify(Rgb::new(255, 255, 255), palette).unwrap(), "White");
    assert_eq!(classify(Rgb::new(254, 1, 1), palette).unwrap(), "Red");
    assert_eq!(classify(Rgb::new(130, 130, 130), palette).unwrap(), "Gray");
}

#[test]
fn test_mid_tones() {
    let palette = Palette::standard();
    // Closer to Gray (128) than to Black or White
    assert_eq!(classify(Rgb::new(100, 100, 100), palette).unwrap(), "Gray");
    assert_eq!(classify(Rgb::new(40, 40, 40), palette).unwrap(), "Black");
    assert_eq!(classify(Rgb::new(240, 240, 240), palette).unwrap(), "White");
    assert_eq!(classify(Rgb::new(200, 0, 200), palette).unwrap(), "Magenta");
    assert_eq!(classify(Rgb::new(10, 230, 240), palette).unwrap(), "Cyan");
}

// ===================
// Contract
// ===================

#[test]
fn test_empty_palette() {
    let empty = Palette::empty();
    let result = classify(Rgb::new(12, 34, 56), &empty);
    assert!(matches!(result, Err(Error::EmptyPalette)));
    assert!(matches!(
        nearest(Rgb::new(0, 0, 0), &empty),
        Err(Error::EmptyPalette)
    ));
}

#[test]
fn test_identical_colors_first_declared_wins() {
    let palette = Palette::new([
        ("Crimson", Rgb::new(220, 20, 60)),
        ("AlsoCrimson", Rgb::new(220, 20, 60)),
    ])
    .unwrap();
    assert_eq!(classify(Rgb::new(220, 20, 60), &palette).unwrap(), "Crimson");
    assert_eq!(classify(Rgb::new(0, 0, 0), &palette).unwrap(), "Crimson");
}

#[test]
fn test_repeated_calls_agree() {
    let palette = Palette::standard();
    for target in [Rgb::new(1, 2, 3), Rgb::new(200, 100, 50), Rgb::new(-9, 999, 0)] {
        let first = nearest(target, palette).unwrap();
        let second = nearest(target, palette).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_distance_is_symmetric_and_zero_on_self() {
    let colors = [
        Rgb::new(0, 0, 0),
        Rgb::new(255, 0, 128),
        Rgb::new(17, 34, 51),
        Rgb::new(-100, 400, 7),
    ];
    for a in colors {
        assert_eq!(distance(a, a), 0.0);
        for b in colors {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }
}

#[test]
fn test_distance_across_cube() {
    let d = distance(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
    assert!((d - 255.0 * 3f64.sqrt()).abs() < 1e-9);
}
