use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Mode;
use crate::config::{parse_key, parse_modifiers, Config, KeyBinding};

use super::Action;

/// Dispatches key events to actions based on configuration
pub struct ActionDispatcher {
    bindings: Vec<KeyBinding>,
}

impl ActionDispatcher {
    /// Create a new dispatcher from configuration
    pub fn new(config: &Config) -> Self {
        for binding in &config.bindings {
            if let Err(e) = parse_key(&binding.key) {
                tracing::warn!("Ignoring binding for {:?}: {}", binding.action, e);
            }
        }
        Self {
            bindings: config.bindings.clone(),
        }
    }

    /// Dispatch a key event to an action
    pub fn dispatch(&self, key: KeyEvent, mode: &Mode) -> Option<Action> {
        let modifiers = effective_modifiers(&key);

        // First, check configured bindings
        for binding in &self.bindings {
            if self.matches(binding, key.code, modifiers, mode) {
                if let Some(action) = Action::from_str(&binding.action) {
                    return Some(action);
                }
            }
        }

        // Free text entry in the RGB form and the path dialog
        if matches!(mode, Mode::Insert | Mode::Dialog) {
            if modifiers.is_empty() {
                if let KeyCode::Char(c) = key.code {
                    return Some(Action::InsertChar(c));
                }
            }
            if key.code == KeyCode::Backspace {
                return Some(Action::DeleteChar);
            }
        }

        None
    }

    /// Check if a binding matches the key and mode
    fn matches(
        &self,
        binding: &KeyBinding,
        code: KeyCode,
        modifiers: KeyModifiers,
        mode: &Mode,
    ) -> bool {
        let Ok(binding_key) = parse_key(&binding.key) else {
            return false;
        };

        if binding_key != code {
            return false;
        }

        if parse_modifiers(binding.mods.as_deref()) != modifiers {
            return false;
        }

        match &binding.mode {
            Some(mode_str) => self.mode_matches(mode_str, mode),
            None => true,
        }
    }

    /// Check if mode restriction matches current mode
    fn mode_matches(&self, mode_str: &str, current_mode: &Mode) -> bool {
        let mode_str = mode_str.trim();

        // Handle negation (~)
        if let Some(stripped) = mode_str.strip_prefix('~') {
            return !self.mode_matches(stripped, current_mode);
        }

        // Handle multiple modes (|)
        if mode_str.contains('|') {
            return mode_str
                .split('|')
                .any(|m| self.mode_matches(m, current_mode));
        }

        self.mode_name_matches(mode_str, current_mode)
    }

    fn mode_name_matches(&self, name: &str, current_mode: &Mode) -> bool {
        match name.trim().to_lowercase().as_str() {
            "normal" => matches!(current_mode, Mode::Normal),
            "insert" => matches!(current_mode, Mode::Insert),
            "pick" => matches!(current_mode, Mode::Pick),
            "dialog" => matches!(current_mode, Mode::Dialog),
            _ => false,
        }
    }
}

/// Modifiers that take part in matching.
///
/// Shift is already encoded in the character itself ('J', '?') and in
/// BackTab, so it is dropped for those keys.
fn effective_modifiers(key: &KeyEvent) -> KeyModifiers {
    match key.code {
        KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    }
}
