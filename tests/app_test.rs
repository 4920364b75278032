//! Tests for app state management

mod common;

use common::{test_app, TestImage};
use huename::app::{DialogKind, Mode, Notification, NotificationLevel, RgbForm, Source};
use huename::color::{Channel, Rgb};
use huename::config::Config;
use huename::{App, Error, Picture};

fn fill_form(app: &mut App, red: &str, green: &str, blue: &str) {
    *app.form.field_mut(Channel::Red) = red.to_string();
    *app.form.field_mut(Channel::Green) = green.to_string();
    *app.form.field_mut(Channel::Blue) = blue.to_string();
}

// ===================
// Initial state
// ===================

#[test]
fn test_app_new() {
    let app = test_app();
    assert_eq!(app.mode, Mode::Normal);
    assert!(!app.has_active_dialog());
    assert!(app.picture.is_none());
    assert!(app.last.is_none());
    assert!(app.history.is_empty());
    assert_eq!(app.palette.len(), 11);
    assert_eq!(app.palette_state.selected(), Some(0));
    assert!(!app.should_quit);
}

#[test]
fn test_result_label_before_any_recognition() {
    let app = test_app();
    assert_eq!(app.result_label(), "Color: Unknown");
}

// ===================
// RgbForm tests
// ===================

#[test]
fn test_rgb_form_default() {
    let form = RgbForm::default();
    assert_eq!(form.focus, Channel::Red);
    assert_eq!(form.field(Channel::Red), "");
    assert_eq!(form.field(Channel::Green), "");
    assert_eq!(form.field(Channel::Blue), "");
}

#[test]
fn test_rgb_form_set_color_and_parse() {
    let mut form = RgbForm::default();
    form.set_color(Rgb::new(255, 165, 0));
    assert_eq!(form.field(Channel::Green), "165");
    assert_eq!(form.parse().unwrap(), Rgb::new(255, 165, 0));
}

#[test]
fn test_rgb_form_parse_rejects_bad_field() {
    let mut form = RgbForm::default();
    form.set_color(Rgb::new(1, 2, 3));
    *form.field_mut(Channel::Blue) = "blue".to_string();
    assert!(matches!(
        form.parse(),
        Err(Error::InvalidInput {
            channel: Channel::Blue,
            ..
        })
    ));
}

// ===================
// Recognition from input
// ===================

#[test]
fn test_recognize_from_input() {
    let mut app = test_app();
    fill_form(&mut app, "254", "1", "1");

    let recognition = app.recognize_from_input().unwrap();
    assert_eq!(recognition.name, "Red");
    assert_eq!(recognition.source, Source::Input);
    assert_eq!(recognition.color, Rgb::new(254, 1, 1));

    assert_eq!(app.result_label(), "Color: Red");
    assert_eq!(app.history.len(), 1);
    assert_eq!(app.selected_entry().unwrap().name, "Red");
}

#[test]
fn test_recognize_from_input_trims_whitespace() {
    let mut app = test_app();
    fill_form(&mut app, " 130 ", "130", "130\t");
    assert_eq!(app.recognize_from_input().unwrap().name, "Gray");
}

#[test]
fn test_recognize_from_input_invalid_keeps_previous_result() {
    let mut app = test_app();
    fill_form(&mut app, "0", "0", "0");
    app.recognize_from_input().unwrap();

    fill_form(&mut app, "12", "", "7");
    assert!(matches!(
        app.recognize_from_input(),
        Err(Error::InvalidInput {
            channel: Channel::Green,
            ..
        })
    ));
    assert_eq!(app.result_label(), "Color: Black");
    assert_eq!(app.history.len(), 1);
}

#[test]
fn test_recognize_from_input_out_of_range() {
    let mut app = test_app();
    fill_form(&mut app, "256", "0", "0");
    assert!(matches!(
        app.recognize_from_input(),
        Err(Error::ComponentOutOfRange {
            channel: Channel::Red,
            value: 256
        })
    ));
    assert!(app.last.is_none());
}

// ===================
// History
// ===================

#[test]
fn test_history_newest_first() {
    let mut app = test_app();
    app.recognize(Rgb::new(0, 0, 0), Source::Input).unwrap();
    app.recognize(Rgb::new(255, 255, 255), Source::Input).unwrap();

    let names: Vec<_> = app.history.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["White", "Black"]);
}

#[test]
fn test_history_is_capped() {
    let mut config = Config::default();
    config.ui.history_size = 3;
    let mut app = App::new(config);

    for value in 0..10 {
        app.recognize(Rgb::new(value, value, value), Source::Input)
            .unwrap();
    }
    assert_eq!(app.history.len(), 3);
    assert_eq!(app.history[0].color, Rgb::new(9, 9, 9));
}

#[test]
fn test_clear_history_keeps_last_result() {
    let mut app = test_app();
    app.recognize(Rgb::new(0, 0, 255), Source::Input).unwrap();
    app.clear_history();
    assert!(app.history.is_empty());
    assert_eq!(app.result_label(), "Color: Blue");
}

// ===================
// Image picking
// ===================

#[test]
fn test_enter_pick_mode_without_image() {
    let mut app = test_app();
    assert!(matches!(app.enter_pick_mode(), Err(Error::NoImageLoaded)));
    assert_eq!(app.mode, Mode::Normal);
}

#[test]
fn test_set_picture_centers_cursor() {
    let image = TestImage::new();
    let mut app = test_app();
    app.set_picture(Picture::open(&image.path).unwrap());
    assert_eq!(app.cursor, (2, 1));
}

#[test]
fn test_move_cursor_clamps_to_image() {
    let image = TestImage::new();
    let mut app = test_app();
    app.set_picture(Picture::open(&image.path).unwrap());

    app.move_cursor(-100, -100);
    assert_eq!(app.cursor, (0, 0));
    app.move_cursor(100, 100);
    assert_eq!(app.cursor, (3, 1));
}

#[test]
fn test_sample_at_cursor() {
    let image = TestImage::new();
    let mut app = test_app();
    app.set_picture(Picture::open(&image.path).unwrap());
    app.enter_pick_mode().unwrap();
    assert_eq!(app.mode, Mode::Pick);

    app.move_cursor(-100, -100);
    let recognition = app.sample_at_cursor().unwrap();
    assert_eq!(recognition.name, "Red");
    assert_eq!(recognition.source, Source::Pixel { x: 0, y: 0 });

    // One sample per activation
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.result_label(), "Picked Color: Red");
}

#[test]
fn test_sample_ignores_alpha() {
    let image = TestImage::new();
    let mut app = test_app();
    app.set_picture(Picture::open(&image.path).unwrap());
    app.move_cursor(100, 100);

    let recognition = app.sample_at_cursor().unwrap();
    assert_eq!(recognition.color, Rgb::new(255, 192, 203));
    assert_eq!(recognition.name, "Pink");
}

#[test]
fn test_sample_without_image() {
    let mut app = test_app();
    assert!(matches!(app.sample_at_cursor(), Err(Error::NoImageLoaded)));
}

// ===================
// Palette navigation
// ===================

#[test]
fn test_palette_navigation_wraps() {
    let mut app = test_app();
    app.move_up();
    assert_eq!(app.palette_state.selected(), Some(10));
    app.move_down();
    assert_eq!(app.palette_state.selected(), Some(0));
}

#[test]
fn test_palette_top_bottom() {
    let mut app = test_app();
    app.move_bottom();
    assert_eq!(app.palette_state.selected(), Some(app.palette.len() - 1));
    app.move_top();
    assert_eq!(app.palette_state.selected(), Some(0));
}

#[test]
fn test_use_selected_palette_color() {
    let mut app = test_app();
    let idx = app.palette.position("Orange").unwrap();
    app.palette_state.select(Some(idx));

    app.use_selected_palette_color();
    assert_eq!(app.form.parse().unwrap(), Rgb::new(255, 165, 0));
    assert_eq!(app.recognize_from_input().unwrap().name, "Orange");
}

// ===================
// Dialogs and notifications
// ===================

#[test]
fn test_close_dialog() {
    let mut app = test_app();
    app.dialog = DialogKind::Help;
    app.mode = Mode::Dialog;
    assert!(app.has_active_dialog());

    app.close_dialog();
    assert!(!app.has_active_dialog());
    assert_eq!(app.mode, Mode::Normal);
}

#[test]
fn test_show_error() {
    let mut app = test_app();
    app.show_error("No image loaded.");
    assert_eq!(app.notifications.len(), 1);
    assert_eq!(app.notifications[0].message, "No image loaded.");
    assert_eq!(app.notifications[0].level, NotificationLevel::Error);
}

#[test]
fn test_notification_levels() {
    assert_eq!(Notification::info("hi").level, NotificationLevel::Info);
    assert_eq!(Notification::error("oops").level, NotificationLevel::Error);
    assert!(!Notification::info("fresh").is_expired());
}
