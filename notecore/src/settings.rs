//! Settings for Notepad
//!
//! Read once at startup from `settings.json` in the platform config
//! directory. The file is optional and the editor never writes it.

use crate::error::ConfigError;
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `log_level`.
pub const LOG_ENV: &str = "NOTEPAD_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    pub font_size: f32,
    pub word_wrap: bool,
    pub theme: ThemeMode,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800.0,
            window_height: 600.0,
            font_size: 13.0,
            word_wrap: true,
            theme: ThemeMode::System,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load from the default location. A missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a settings file. A key whose value does not fit falls back to
    /// its default on its own; only unreadable JSON rejects the whole file.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let file: serde_json::Map<String, serde_json::Value> = serde_json::from_str(contents)?;
        let mut merged = serde_json::to_value(Self::default())?;
        for (key, value) in file {
            let mut candidate = merged.clone();
            candidate[key.as_str()] = value;
            if serde_json::from_value::<Self>(candidate.clone()).is_ok() {
                merged = candidate;
            } else {
                log::warn!("settings: ignoring invalid value for `{}`", key);
            }
        }
        Ok(serde_json::from_value(merged)?)
    }

    /// Effective log level: `NOTEPAD_LOG` wins over the file.
    pub fn log_level(&self) -> log::LevelFilter {
        let from_env = std::env::var(LOG_ENV).ok();
        crate::logging::parse_level(from_env.as_deref().unwrap_or(&self.log_level))
    }

    /// Initial window size, never smaller than something usable.
    pub fn window_size(&self) -> [f32; 2] {
        [self.window_width.max(320.0), self.window_height.max(200.0)]
    }
}

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("org", "notepad", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the data directory for an app (logs live here)
pub fn data_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("org", "notepad", app_name)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn settings_path() -> PathBuf {
    config_dir("notepad").join("settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScratchDir;

    #[test]
    fn test_defaults_match_classic_window() {
        let s = Settings::default();
        assert_eq!(s.window_size(), [800.0, 600.0]);
        assert_eq!(s.theme, ThemeMode::System);
        assert!(s.word_wrap);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let s = Settings::parse(r#"{ "theme": "dark", "font_size": 16.0 }"#).unwrap();
        assert_eq!(s.theme, ThemeMode::Dark);
        assert_eq!(s.font_size, 16.0);
        assert_eq!(s.window_width, 800.0);
        assert_eq!(s.log_level, "info");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(matches!(Settings::parse("{ theme: "), Err(ConfigError::Json(_))));
        assert!(matches!(Settings::parse("[1, 2]"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_bad_value_falls_back_for_that_key_only() {
        let s = Settings::parse(r#"{ "theme": "sepia", "font_size": 16.0 }"#).unwrap();
        assert_eq!(s.theme, ThemeMode::System);
        assert_eq!(s.font_size, 16.0);

        let s = Settings::parse(r#"{ "word_wrap": "yes", "theme": "dark", "extra": 1 }"#).unwrap();
        assert!(s.word_wrap);
        assert_eq!(s.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = ScratchDir::new("settings");
        let s = Settings::load_from(&dir.join("settings.json")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = ScratchDir::new("settings-file");
        let path = dir.join("settings.json");
        std::fs::write(&path, r#"{ "window_width": 100.0, "word_wrap": false }"#).unwrap();

        let s = Settings::load_from(&path).unwrap();
        assert!(!s.word_wrap);
        assert_eq!(s.window_size(), [320.0, 600.0]);
    }
}
