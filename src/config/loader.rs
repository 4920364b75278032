use std::path::{Path, PathBuf};

use crate::error::Result;

use super::{Config, ConfigFile};

const APP_DIR: &str = "huename";
const LOCAL_DIR: &str = ".huename";
const FILE_NAME: &str = "config.toml";

/// Path of the global config file (~/.config/huename/config.toml on Linux)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR).join(FILE_NAME))
}

fn read_file(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let file: ConfigFile = toml::from_str(&content)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(file))
}

/// Find .huename/config.toml in `start_path` or its parents
fn find_local_config(start_path: &Path) -> Option<PathBuf> {
    start_path
        .ancestors()
        .map(|dir| dir.join(LOCAL_DIR).join(FILE_NAME))
        .find(|candidate| candidate.exists())
}

impl Config {
    /// Load and merge global and local configuration
    pub fn load() -> Result<Config> {
        let current_dir = std::env::current_dir()?;
        Self::load_from(global_config_path().as_deref(), &current_dir)
    }

    /// Load from an explicit global file and a directory to search upward from
    pub fn load_from(global_path: Option<&Path>, start_path: &Path) -> Result<Config> {
        let global = match global_path {
            Some(path) => read_file(path)?.unwrap_or_default(),
            None => ConfigFile::default(),
        };
        let local = match find_local_config(start_path) {
            Some(path) => read_file(&path)?.unwrap_or_default(),
            None => ConfigFile::default(),
        };

        Ok(global.merge(local).into())
    }
}
