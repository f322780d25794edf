use std::fmt;
use std::path::{Path, PathBuf};

use crate::types::config::Settings;
use crate::types::options::Options;

/// File name looked up inside the config directory.
pub const SETTINGS_FILE: &str = "settings.yaml";

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    Io { path: PathBuf, error: std::io::Error },
    /// The file is not valid YAML for the expected shape.
    Parse { path: PathBuf, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, error } => {
                write!(f, "cannot read {}: {}", path.display(), error)
            }
            ConfigError::Parse { path, message } => {
                write!(f, "invalid {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}


/// Load `settings.yaml` from `config_dir`. A missing file yields defaults.
pub fn load_from_dir(config_dir: &Path) -> Result<Settings, ConfigError> {
    let path = config_dir.join(SETTINGS_FILE);
    if !path.exists() {
        log::debug!("no settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    load(&path)
}


/// Load `Settings` from a YAML file. Keys left out keep their defaults.
pub fn load(path: &Path) -> Result<Settings, ConfigError> {
    let content = read(path)?;
    parse(path, &content)
}


/// Load an options bag from a YAML file.
pub fn load_options(path: &Path) -> Result<Options, ConfigError> {
    let content = read(path)?;
    if content.trim().is_empty() {
        return Ok(Options::default());
    }
    serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}


fn parse(path: &Path, content: &str) -> Result<Settings, ConfigError> {
    // An empty document deserializes to unit, not a mapping.
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}


fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
        path: path.to_path_buf(),
        error,
    })
}
