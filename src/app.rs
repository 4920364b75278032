use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use ratatui::widgets::ListState;
use tachyonfx::Interpolation;

use crate::action::{ActionDispatcher, ActionHandler};
use crate::color::{nearest, Channel, Palette, PaletteEntry, Rgb};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::parse_rgb;
use crate::picture::Picture;
use crate::tui::{render, Event, EventHandler, Terminal};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    Pick,
    Dialog,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Normal => write!(f, "Normal"),
            Mode::Insert => write!(f, "Insert"),
            Mode::Pick => write!(f, "Pick"),
            Mode::Dialog => write!(f, "Dialog"),
        }
    }
}

/// The three RGB text fields
#[derive(Debug, Clone)]
pub struct RgbForm {
    pub red: String,
    pub green: String,
    pub blue: String,
    pub focus: Channel,
}

impl Default for RgbForm {
    fn default() -> Self {
        Self {
            red: String::new(),
            green: String::new(),
            blue: String::new(),
            focus: Channel::Red,
        }
    }
}

impl RgbForm {
    pub fn field(&self, channel: Channel) -> &str {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    pub fn field_mut(&mut self, channel: Channel) -> &mut String {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// The field that currently receives typed characters
    pub fn focused_mut(&mut self) -> &mut String {
        self.field_mut(self.focus)
    }

    /// Overwrite all three fields with a color
    pub fn set_color(&mut self, color: Rgb) {
        for channel in Channel::ALL {
            *self.field_mut(channel) = color.channel(channel).to_string();
        }
    }

    pub fn parse(&self) -> Result<Rgb> {
        parse_rgb(&self.red, &self.green, &self.blue)
    }
}

/// Path input for the load-image dialog
#[derive(Debug, Clone, Default)]
pub struct PathInput {
    pub path: String,
    /// Matches from the last ambiguous completion
    pub candidates: Vec<String>,
}

impl PathInput {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            candidates: Vec::new(),
        }
    }

    /// Path with a leading "~/" expanded to the home directory
    pub fn expanded(&self) -> PathBuf {
        expand_home(&self.path)
    }

    /// Complete the path against the file system.
    ///
    /// A single match replaces the input (directories get a trailing '/');
    /// several matches extend the input to their common prefix and are kept
    /// in `candidates`.
    pub fn complete(&mut self) {
        let typed = self.path.clone();
        let expanded = expand_home(&typed).to_string_lossy().into_owned();
        let pattern = format!("{}*", glob::Pattern::escape(&expanded));

        let mut matches: Vec<String> = match glob::glob(&pattern) {
            Ok(paths) => paths
                .filter_map(|entry| entry.ok())
                .map(|path| {
                    let mut s = path.to_string_lossy().into_owned();
                    if path.is_dir() {
                        s.push('/');
                    }
                    s
                })
                .collect(),
            Err(e) => {
                tracing::debug!("Bad completion pattern {}: {}", pattern, e);
                Vec::new()
            }
        };
        matches.sort();

        // Keep the user's "~/" spelling
        let home_prefix = (typed != expanded)
            .then(|| dirs::home_dir().map(|h| h.to_string_lossy().into_owned()))
            .flatten();
        let display = |s: &str| match &home_prefix {
            Some(home) if s.starts_with(home.as_str()) => s.replacen(home.as_str(), "~", 1),
            _ => s.to_string(),
        };

        match matches.as_slice() {
            [] => self.candidates.clear(),
            [only] => {
                self.path = display(only);
                self.candidates.clear();
            }
            several => {
                let prefix = common_prefix(several);
                if prefix.len() > expanded.len() {
                    self.path = display(&prefix);
                }
                self.candidates = several.iter().map(|s| display(s)).collect();
            }
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn common_prefix(items: &[String]) -> String {
    let Some(first) = items.first() else {
        return String::new();
    };
    let mut end = first.len();
    for item in &items[1..] {
        end = first
            .char_indices()
            .zip(item.chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map_or(0, |((i, a), _)| i + a.len_utf8())
            .min(end);
    }
    first[..end].to_string()
}

/// Dialog types (UI only - what to display)
#[derive(Debug, Clone, Default)]
pub enum DialogKind {
    #[default]
    None,
    LoadImage(PathInput),
    Help,
}

/// Where a classified color came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Input,
    Pixel { x: u32, y: u32 },
}

/// One completed classification
#[derive(Debug, Clone)]
pub struct Recognition {
    pub source: Source,
    pub color: Rgb,
    pub name: String,
    pub matched: Rgb,
    pub distance: f64,
    pub at: DateTime<Local>,
}

impl Recognition {
    /// Text shown in the result panel
    pub fn label(&self) -> String {
        match self.source {
            Source::Input => format!("Color: {}", self.name),
            Source::Pixel { .. } => format!("Picked Color: {}", self.name),
        }
    }
}

/// Notification level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Notification duration
const NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

/// Slide-out animation duration
const SLIDE_OUT_DURATION_MS: u128 = 300;

/// Notification with slide-out animation
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: Instant::now() + NOTIFICATION_DURATION,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Offset (0 to popup_width) during the last 300ms before expiry
    pub fn slide_offset(&self, popup_width: u16) -> u16 {
        let now = Instant::now();
        if now >= self.expires_at {
            return popup_width;
        }
        let remaining_ms = self.expires_at.duration_since(now).as_millis();

        if remaining_ms >= SLIDE_OUT_DURATION_MS {
            return 0;
        }

        let progress = 1.0 - (remaining_ms as f32 / SLIDE_OUT_DURATION_MS as f32);
        let eased = Interpolation::QuadOut.alpha(progress);

        (popup_width as f32 * eased) as u16
    }
}

/// Main application state
pub struct App {
    pub config: Config,
    pub mode: Mode,
    pub dialog: DialogKind,

    pub palette: &'static Palette,
    pub palette_state: ListState,

    pub form: RgbForm,

    // Loaded image and pick cursor (pixel coordinates)
    pub picture: Option<Picture>,
    pub cursor: (u32, u32),

    // Results, newest first in history
    pub last: Option<Recognition>,
    pub history: VecDeque<Recognition>,

    // Notifications (stacked, newest at end)
    pub notifications: Vec<Notification>,

    pub should_quit: bool,

    action_dispatcher: ActionDispatcher,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        let action_dispatcher = ActionDispatcher::new(&config);
        let mut palette_state = ListState::default();
        palette_state.select(Some(0));

        Self {
            config,
            mode: Mode::Normal,
            dialog: DialogKind::None,
            palette: Palette::standard(),
            palette_state,
            form: RgbForm::default(),
            picture: None,
            cursor: (0, 0),
            last: None,
            history: VecDeque::new(),
            notifications: Vec::new(),
            should_quit: false,
            action_dispatcher,
        }
    }

    /// Run the application main loop
    pub async fn run(&mut self, mut terminal: Terminal) -> Result<()> {
        let event_handler = EventHandler::new(self.config.ui.tick_rate_ms);

        while !self.should_quit {
            terminal.draw(|frame| render(frame, self))?;

            if let Some(event) = event_handler.poll()? {
                self.handle_event(event).await?;
            }

            self.notifications.retain(|n| !n.is_expired());
        }

        Ok(())
    }

    async fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => {
                if let Some(action) = self.action_dispatcher.dispatch(key, &self.mode) {
                    ActionHandler::handle(self, action).await?;
                }
            }
            Event::Resize | Event::Tick => {}
        }
        Ok(())
    }

    /// Label for the result panel
    pub fn result_label(&self) -> String {
        self.last
            .as_ref()
            .map_or_else(|| "Color: Unknown".to_string(), Recognition::label)
    }

    /// Classify a color against the palette and record the result
    pub fn recognize(&mut self, color: Rgb, source: Source) -> Result<&Recognition> {
        let found = nearest(color, self.palette)?;
        tracing::info!(
            "Classified {} as {} (distance {:.2})",
            color,
            found.name,
            found.distance
        );

        let recognition = Recognition {
            source,
            color,
            name: found.name.to_string(),
            matched: found.color,
            distance: found.distance,
            at: Local::now(),
        };

        self.palette_state
            .select(self.palette.position(&recognition.name));

        self.history.push_front(recognition.clone());
        self.history.truncate(self.config.ui.history_size);

        Ok(self.last.insert(recognition))
    }

    /// Parse the RGB form and classify it
    pub fn recognize_from_input(&mut self) -> Result<&Recognition> {
        let color = self.form.parse()?;
        self.recognize(color, Source::Input)
    }

    /// Replace the loaded image, centering the pick cursor
    pub fn set_picture(&mut self, picture: Picture) {
        self.cursor = (picture.width() / 2, picture.height() / 2);
        self.picture = Some(picture);
        if self.mode == Mode::Pick {
            self.mode = Mode::Normal;
        }
    }

    /// Arm a single pixel pick
    pub fn enter_pick_mode(&mut self) -> Result<()> {
        if self.picture.is_none() {
            return Err(Error::NoImageLoaded);
        }
        self.mode = Mode::Pick;
        Ok(())
    }

    /// Move the pick cursor, clamped to the image
    pub fn move_cursor(&mut self, dx: i64, dy: i64) {
        let Some(picture) = &self.picture else {
            return;
        };
        let clamp = |v: u32, d: i64, len: u32| {
            (i64::from(v) + d).clamp(0, i64::from(len.saturating_sub(1))) as u32
        };
        self.cursor = (
            clamp(self.cursor.0, dx, picture.width()),
            clamp(self.cursor.1, dy, picture.height()),
        );
    }

    /// Sample the pixel under the cursor, classify it and leave pick mode
    pub fn sample_at_cursor(&mut self) -> Result<&Recognition> {
        let (x, y) = self.cursor;
        let color = self
            .picture
            .as_ref()
            .ok_or(Error::NoImageLoaded)?
            .sample(x, y)?;
        self.mode = Mode::Normal;
        self.recognize(color, Source::Pixel { x, y })
    }

    /// Selected palette entry
    pub fn selected_entry(&self) -> Option<&PaletteEntry> {
        self.palette_state
            .selected()
            .and_then(|idx| self.palette.entries().get(idx))
    }

    /// Copy the selected palette entry into the RGB form
    pub fn use_selected_palette_color(&mut self) {
        if let Some(color) = self.selected_entry().map(|e| e.color) {
            self.form.set_color(color);
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if there's an active dialog
    pub fn has_active_dialog(&self) -> bool {
        !matches!(self.dialog, DialogKind::None)
    }

    /// Close any dialog and return to normal mode
    pub fn close_dialog(&mut self) {
        self.dialog = DialogKind::None;
        self.mode = Mode::Normal;
    }

    /// Show error notification
    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}", message);
        self.notifications.push(Notification::error(message));
    }

    /// Show notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Move palette selection up
    pub fn move_up(&mut self) {
        let len = self.palette.len();
        if len == 0 {
            return;
        }
        let current = self.palette_state.selected().unwrap_or(0);
        let next = if current == 0 { len - 1 } else { current - 1 };
        self.palette_state.select(Some(next));
    }

    /// Move palette selection down
    pub fn move_down(&mut self) {
        let len = self.palette.len();
        if len == 0 {
            return;
        }
        let current = self.palette_state.selected().unwrap_or(0);
        self.palette_state.select(Some((current + 1) % len));
    }

    pub fn move_top(&mut self) {
        if !self.palette.is_empty() {
            self.palette_state.select(Some(0));
        }
    }

    pub fn move_bottom(&mut self) {
        if let Some(last) = self.palette.len().checked_sub(1) {
            self.palette_state.select(Some(last));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_display() {
        assert_eq!(format!("{}", Mode::Normal), "Normal");
        assert_eq!(format!("{}", Mode::Insert), "Insert");
        assert_eq!(format!("{}", Mode::Pick), "Pick");
        assert_eq!(format!("{}", Mode::Dialog), "Dialog");
    }

    #[test]
    fn test_rgb_form_set_color() {
        let mut form = RgbForm::default();
        form.set_color(Rgb::new(255, 165, 0));
        assert_eq!(form.field(Channel::Red), "255");
        assert_eq!(form.field(Channel::Green), "165");
        assert_eq!(form.field(Channel::Blue), "0");
        assert_eq!(form.parse().unwrap(), Rgb::new(255, 165, 0));
    }

    #[test]
    fn test_common_prefix() {
        let items = vec!["photo-1.png".to_string(), "photo-2.png".to_string()];
        assert_eq!(common_prefix(&items), "photo-");
        assert_eq!(common_prefix(&["abc".to_string()]), "abc");
        assert_eq!(
            common_prefix(&["abc".to_string(), "xyz".to_string()]),
            ""
        );
        assert_eq!(common_prefix(&[]), "");
    }

    #[test]
    fn test_recognition_label() {
        let mut recognition = Recognition {
            source: Source::Input,
            color: Rgb::new(254, 1, 1),
            name: "Red".to_string(),
            matched: Rgb::new(255, 0, 0),
            distance: 3f64.sqrt(),
            at: Local::now(),
        };
        assert_eq!(recognition.label(), "Color: Red");
        recognition.source = Source::Pixel { x: 1, y: 2 };
        assert_eq!(recognition.label(), "Picked Color: Red");
    }

    #[test]
    fn test_notification_slide_offset_not_sliding_initially() {
        let notification = Notification::info("Test");
        assert!(!notification.is_expired());
        assert_eq!(notification.slide_offset(100), 0);
    }
}
