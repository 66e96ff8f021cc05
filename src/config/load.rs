use std::env;
use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};

use super::schema::Settings;

impl Settings {
    /// Load settings with the usual precedence: struct defaults, then the
    /// config file when one exists, then `HARMONY__` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = config_file() {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder
            .add_source(
                Environment::with_prefix("HARMONY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject values the rest of the player cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.ui.progress_tick_ms == 0 {
            return Err("ui.progress_tick_ms must be >= 1".to_string());
        }
        if self.library.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err("library.extensions must name at least one suffix".to_string());
        }
        Ok(())
    }
}

/// Where the config file lives: `HARMONY_CONFIG_PATH` wins, otherwise
/// `harmony/config.toml` under the XDG config home, with `~/.config` as
/// the usual fallback when `XDG_CONFIG_HOME` is unset.
pub fn config_file() -> Option<PathBuf> {
    if let Some(path) = env::var_os("HARMONY_CONFIG_PATH") {
        return Some(PathBuf::from(path));
    }
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(config_home.join("harmony").join("config.toml"))
}
