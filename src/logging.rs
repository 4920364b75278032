//! tracing subscriber setup.
//!
//! The filter comes from `HUENAME_LOG` (same syntax as `RUST_LOG`).

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const ENV_VAR: &str = "HUENAME_LOG";

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr, warnings and above unless overridden
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Path of the log file used while the terminal UI owns the screen
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("huename").join("huename.log"))
}

/// Log to the cache-directory file. Returns the file path, or `None` when
/// the file could not be opened and logging stays off.
pub fn init_file() -> Option<PathBuf> {
    let path = log_file_path()?;
    std::fs::create_dir_all(path.parent()?).ok()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}
