use serde::{Deserialize, Serialize};

use super::defaults::default_bindings;

/// Resolved configuration used by the application
#[derive(Debug, Clone)]
pub struct Config {
    pub ui: UiConfig,

    /// User bindings first, built-in defaults after them
    pub bindings: Vec<KeyBinding>,
}

impl Default for Config {
    fn default() -> Self {
        ConfigFile::default().into()
    }
}

/// Display and interaction settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Show the distance to the matched palette entry
    pub show_distance: bool,
    /// Number of recognitions kept in the history panel
    pub history_size: usize,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Pixels moved by a fast cursor move in pick mode
    pub jump_step: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_distance: true,
            history_size: 10,
            tick_rate_ms: 16,
            jump_step: 10,
        }
    }
}

/// Contents of one config.toml, every value optional so files can be layered
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub ui: UiFile,

    #[serde(default)]
    pub bindings: Vec<KeyBinding>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiFile {
    pub show_distance: Option<bool>,
    pub history_size: Option<usize>,
    pub tick_rate_ms: Option<u64>,
    pub jump_step: Option<u32>,
}

impl ConfigFile {
    /// Merge two files, with `other` taking precedence
    pub fn merge(self, other: ConfigFile) -> ConfigFile {
        let mut bindings = other.bindings;
        bindings.extend(self.bindings);

        ConfigFile {
            ui: UiFile {
                show_distance: other.ui.show_distance.or(self.ui.show_distance),
                history_size: other.ui.history_size.or(self.ui.history_size),
                tick_rate_ms: other.ui.tick_rate_ms.or(self.ui.tick_rate_ms),
                jump_step: other.ui.jump_step.or(self.ui.jump_step),
            },
            bindings,
        }
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let defaults = UiConfig::default();
        let mut bindings = file.bindings;
        bindings.extend(default_bindings());

        Config {
            ui: UiConfig {
                show_distance: file.ui.show_distance.unwrap_or(defaults.show_distance),
                history_size: file.ui.history_size.unwrap_or(defaults.history_size),
                tick_rate_ms: file
                    .ui
                    .tick_rate_ms
                    .unwrap_or(defaults.tick_rate_ms)
                    .max(1),
                jump_step: file.ui.jump_step.unwrap_or(defaults.jump_step).max(1),
            },
            bindings,
        }
    }
}

/// Key binding configuration (Alacritty-style)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key to bind (e.g., "j", "Enter", "Esc", "BackTab")
    pub key: String,

    /// Modifier keys (e.g., "Control", "Alt", "Control|Alt")
    #[serde(default)]
    pub mods: Option<String>,

    /// Mode restriction (e.g., "Normal", "Pick", "~Insert", "Normal|Pick")
    #[serde(default)]
    pub mode: Option<String>,

    /// Built-in action to execute
    pub action: String,
}

impl KeyBinding {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mods: None,
            mode: None,
            action: action.into(),
        }
    }

    pub fn with_mods(mut self, mods: impl Into<String>) -> Self {
        self.mods = Some(mods.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }
}
