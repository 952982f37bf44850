use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

/// Title of the tool's own window. Windows with exactly this title are
/// never listed.
pub const DEFAULT_OWN_TITLE: &str = "Window Resizer";

/// Application configuration.
///
/// Loaded from `~/.config/resizer/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title excluded from the window list (self-exclusion).
    pub own_title: String,
    /// Periodic refresh settings for `resizer watch`.
    pub refresh: RefreshConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Periodic refresh settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Seconds between refreshes. Values below 1 are raised to 1.
    pub interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            own_title: DEFAULT_OWN_TITLE.into(),
            refresh: RefreshConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_secs: 2 }
    }
}

impl Config {
    /// Clamps values to usable ranges.
    pub fn validate(&mut self) {
        self.refresh.interval_secs = self.refresh.interval_secs.max(1);
        if self.own_title.trim().is_empty() {
            self.own_title = DEFAULT_OWN_TITLE.into();
        }
    }
}

/// Returns the config directory: `~/.config/resizer/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("resizer"))
}

/// Returns the config file path: `~/.config/resizer/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Returns the profile path: `~/.config/resizer/profile.json`.
pub fn profile_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("profile.json"))
}

/// Parses and validates `config.toml` contents.
pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults. Any other read or parse
/// error prints a warning and returns defaults.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Config::default(),
        Err(e) => {
            eprintln!("Warning: {}: {e}", path.display());
            return Config::default();
        }
    };

    parse(&content).unwrap_or_else(|e| {
        eprintln!("Warning: failed to parse {}: {e}", path.display());
        Config::default()
    })
}

/// Generates the default `config.toml` contents with explanatory comments.
///
/// Used by `resizer init` to create a starter file.
pub fn template() -> String {
    format!(
        r##"# Window Resizer configuration
# Location: ~/.config/resizer/config.toml

# Windows with exactly this title are left out of the window list.
own_title = "{DEFAULT_OWN_TITLE}"

[refresh]
# Seconds between list refreshes in `resizer watch` (minimum 1).
interval_secs = 2

[logging]
# Write a log file to ~/.config/resizer/logs/resizer.log.
enabled = false
# Minimum level: "debug", "info", "warn" or "error".
level = "info"
# Rotate the log once it reaches this many megabytes.
max_file_mb = 10
"##
    )
}
