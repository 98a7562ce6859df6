//! TOML-based CLI configuration.
//!
//! Stores the defaults a caller would otherwise repeat on every
//! invocation: the insertion policy and the preferred output form.
//! Stored at `~/.config/sendwindow/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use sendwindow_core::InsertPolicy;

/// CLI configuration.
///
/// Serialized to/from TOML at `~/.config/sendwindow/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Insertion policy used when no `--policy` flag is given.
    #[serde(default)]
    pub default_policy: InsertPolicy,
    /// Render schedules in RFC 3339 instead of epoch seconds.
    #[serde(default)]
    pub iso_output: bool,
}

impl Config {
    /// Path of the config file, if a config directory exists on this
    /// platform.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sendwindow").join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default() -> Self {
        Self::path()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|text| toml::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Persist the config, creating the directory if needed.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::path().ok_or("no config directory on this platform")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict_and_numeric() {
        let config = Config::default();
        assert_eq!(config.default_policy, InsertPolicy::Strict);
        assert!(!config.iso_output);
    }

    #[test]
    fn toml_round_trip() {
        let config = Config {
            default_policy: InsertPolicy::Merging,
            iso_output: true,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.default_policy, InsertPolicy::Merging);
        assert!(back.iso_output);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.default_policy, InsertPolicy::Strict);
    }
}
