//! Free-form settings in the same `key=value` grammar as the save file.
//!
//! All values are stored as strings; typed accessors do best-effort parsing
//! with a caller-supplied default.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::kv;

pub const DEFAULT_CONFIG_FILE: &str = "quest.cfg";

#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    settings: HashMap<String, String>,
}

impl GameConfig {
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.settings.insert(key.into(), value.into());
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.settings
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.settings
            .get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.settings
            .get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Truthy values are exactly `true`, `1`, `yes`, `on` (case-sensitive).
    /// A present key with any other value is false; the default applies only
    /// when the key is absent.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.settings.get(key) {
            Some(value) => matches!(value.as_str(), "true" | "1" | "yes" | "on"),
            None => default,
        }
    }
}

/// Settings the game itself consults, with their shipped values.
pub fn default_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.set("auto_save", "true");
    config.set("color", "true");
    config
}

/// Load config from `path`. A missing file is `Ok(None)`; an unreadable one
/// is an error.
pub fn load_config(path: &Path) -> Result<Option<GameConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let mut config = GameConfig::default();
    for (key, value) in kv::parse(&content) {
        config.set(key, value);
    }
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GameConfig {
        let mut config = GameConfig::default();
        config.set("difficulty", "normal");
        config.set("attempts", "3");
        config.set("music_volume", "0.7");
        config.set("auto_save", "yes");
        config.set("fullscreen", "maybe");
        config
    }

    #[test]
    fn string_accessor_falls_back_when_absent() {
        let config = sample();
        assert_eq!(config.get_string("difficulty", "easy"), "normal");
        assert_eq!(config.get_string("theme", "dark"), "dark");
    }

    #[test]
    fn int_accessor_best_effort_parses() {
        let config = sample();
        assert_eq!(config.get_int("attempts", 1), 3);
        assert_eq!(config.get_int("difficulty", 7), 7);
        assert_eq!(config.get_int("missing", 7), 7);
    }

    #[test]
    fn float_accessor_best_effort_parses() {
        let config = sample();
        assert_eq!(config.get_float("music_volume", 0.0), 0.7);
        assert_eq!(config.get_float("difficulty", 1.5), 1.5);
    }

    #[test]
    fn bool_truthy_set_is_exact() {
        let mut config = GameConfig::default();
        for truthy in ["true", "1", "yes", "on"] {
            config.set("flag", truthy);
            assert!(config.get_bool("flag", false), "{truthy} should be truthy");
        }
        for falsy in ["True", "YES", "On", "0", "off", "maybe", ""] {
            config.set("flag", falsy);
            assert!(!config.get_bool("flag", true), "{falsy} should be falsy");
        }
        // Default only applies when the key is absent.
        assert!(config.get_bool("missing", true));
        assert!(!config.get_bool("missing", false));
    }

    #[test]
    fn load_config_reads_kv_grammar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quest.cfg");
        std::fs::write(&path, "# settings\nauto_save=false\ncolor = on\n").unwrap();
        let config = load_config(&path).unwrap().unwrap();
        assert!(!config.get_bool("auto_save", true));
        assert!(config.get_bool("color", false));
    }

    #[test]
    fn load_config_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("none.cfg")).unwrap().is_none());
    }

    #[test]
    fn defaults_cover_game_settings() {
        let config = default_config();
        assert!(config.get_bool("auto_save", false));
        assert!(config.get_bool("color", false));
    }
}
