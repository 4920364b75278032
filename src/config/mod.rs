mod defaults;
mod keybinding;
mod loader;
mod types;

pub use defaults::default_bindings;
pub use keybinding::{parse_key, parse_modifiers};
pub use loader::global_config_path;
pub use types::{Config, ConfigFile, KeyBinding, UiConfig, UiFile};
