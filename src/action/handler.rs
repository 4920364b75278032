use tokio::task::JoinError;

use crate::app::{App, DialogKind, Mode, Notification, PathInput};
use crate::error::{Error, Result};
use crate::picture::Picture;

use super::Action;

/// Handles action execution
pub struct ActionHandler;

impl ActionHandler {
    /// Handle an action
    pub async fn handle(app: &mut App, action: Action) -> Result<()> {
        match action {
            // Navigation
            Action::MoveUp => Self::handle_move(app, 0, -1),
            Action::MoveDown => Self::handle_move(app, 0, 1),
            Action::MoveLeft => Self::handle_move(app, -1, 0),
            Action::MoveRight => Self::handle_move(app, 1, 0),
            Action::MoveTop => app.move_top(),
            Action::MoveBottom => app.move_bottom(),
            Action::JumpUp => Self::handle_jump(app, 0, -1),
            Action::JumpDown => Self::handle_jump(app, 0, 1),
            Action::JumpLeft => Self::handle_jump(app, -1, 0),
            Action::JumpRight => Self::handle_jump(app, 1, 0),

            // RGB form
            Action::NextField => app.form.focus = app.form.focus.next(),
            Action::PrevField => app.form.focus = app.form.focus.prev(),
            Action::ClearField => app.form.focused_mut().clear(),

            // Color operations
            Action::Recognize => Self::handle_recognize(app),
            Action::UsePaletteColor => {
                app.use_selected_palette_color();
                if let Some(entry) = app.selected_entry() {
                    let message = format!("Loaded {} into the form", entry.name);
                    app.notify(Notification::info(message));
                }
            }
            Action::OpenImage => Self::handle_open_image(app),
            Action::PickPixel => {
                if let Err(e) = app.enter_pick_mode() {
                    app.show_error(format!("{}.", e));
                }
            }
            Action::Sample => Self::handle_sample(app),
            Action::ClearHistory => {
                app.clear_history();
                app.notify(Notification::info("History cleared"));
            }

            // Mode switching
            Action::EnterInsertMode => {
                app.mode = Mode::Insert;
            }
            Action::EnterNormalMode => app.close_dialog(),

            // Dialog
            Action::Confirm => Self::handle_confirm(app).await?,
            Action::Cancel => app.close_dialog(),
            Action::Complete => {
                if let DialogKind::LoadImage(ref mut input) = app.dialog {
                    input.complete();
                }
            }

            // Input
            Action::InsertChar(c) => Self::handle_insert_char(app, c),
            Action::DeleteChar => Self::handle_delete_char(app),

            // Other
            Action::ToggleHelp => {
                if matches!(app.dialog, DialogKind::Help) {
                    app.close_dialog();
                } else {
                    app.dialog = DialogKind::Help;
                    app.mode = Mode::Dialog;
                }
            }
            Action::Quit => {
                if app.has_active_dialog() || app.mode != Mode::Normal {
                    app.close_dialog();
                } else {
                    app.should_quit = true;
                }
            }
            Action::ForceQuit => {
                app.should_quit = true;
            }
        }

        Ok(())
    }

    fn handle_move(app: &mut App, dx: i64, dy: i64) {
        match app.mode {
            Mode::Pick => app.move_cursor(dx, dy),
            _ if dy < 0 => app.move_up(),
            _ if dy > 0 => app.move_down(),
            _ => {}
        }
    }

    fn handle_jump(app: &mut App, dx: i64, dy: i64) {
        let step = i64::from(app.config.ui.jump_step);
        if app.mode == Mode::Pick {
            app.move_cursor(dx * step, dy * step);
        }
    }

    fn handle_recognize(app: &mut App) {
        if let Err(e) = app.recognize_from_input() {
            let message = match e {
                Error::InvalidInput { .. } | Error::ComponentOutOfRange { .. } => {
                    format!("Enter valid RGB values. {}", e)
                }
                other => other.to_string(),
            };
            app.show_error(message);
        }
    }

    fn handle_sample(app: &mut App) {
        if let Err(e) = app.sample_at_cursor() {
            app.show_error(e.to_string());
            app.mode = Mode::Normal;
        }
    }

    fn handle_open_image(app: &mut App) {
        let current = app
            .picture
            .as_ref()
            .and_then(|p| p.path())
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        app.dialog = DialogKind::LoadImage(PathInput::new(current));
        app.mode = Mode::Dialog;
    }

    async fn handle_confirm(app: &mut App) -> Result<()> {
        match &app.dialog {
            DialogKind::LoadImage(input) => {
                if input.path.trim().is_empty() {
                    app.show_error("Enter an image path");
                    return Ok(());
                }
                let path = input.expanded();
                app.close_dialog();
                Self::load_picture(app, path).await?;
            }
            DialogKind::Help => app.close_dialog(),
            DialogKind::None => {}
        }
        Ok(())
    }

    /// Decode an image off the UI thread and install it
    pub async fn load_picture(app: &mut App, path: std::path::PathBuf) -> Result<()> {
        let shown = path.display().to_string();
        let decoded = tokio::task::spawn_blocking(move || Picture::open(path)).await;
        Self::finish_load(app, &shown, decoded);
        Ok(())
    }

    /// Install a decoded picture, or report why decoding failed
    fn finish_load(
        app: &mut App,
        shown: &str,
        decoded: std::result::Result<Result<Picture>, JoinError>,
    ) {
        match decoded.map_err(Error::from).and_then(|picture| picture) {
            Ok(picture) => {
                let message = format!(
                    "Loaded {} ({}x{})",
                    shown,
                    picture.width(),
                    picture.height()
                );
                app.set_picture(picture);
                app.notify(Notification::info(message));
            }
            Err(e) => app.show_error(format!("Couldn't load image: {}", e)),
        }
    }

    fn handle_insert_char(app: &mut App, c: char) {
        match &mut app.dialog {
            DialogKind::LoadImage(ref mut input) => {
                input.path.push(c);
                input.candidates.clear();
            }
            DialogKind::Help => {
                // '?' reaches the open help dialog as text
                if c == '?' {
                    app.close_dialog();
                }
            }
            DialogKind::None => {
                if app.mode == Mode::Insert {
                    app.form.focused_mut().push(c);
                }
            }
        }
    }

    fn handle_delete_char(app: &mut App) {
        match &mut app.dialog {
            DialogKind::LoadImage(ref mut input) => {
                input.path.pop();
                input.candidates.clear();
            }
            DialogKind::Help => {}
            DialogKind::None => {
                if app.mode == Mode::Insert {
                    app.form.focused_mut().pop();
                }
            }
        }
    }
}
