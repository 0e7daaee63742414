//! Application configuration.
//!
//! Read from `<config dir>/todo-list/config.toml`. Every field is optional;
//! a missing file means defaults.
//!
//! ```toml
//! color_scheme = "light"
//! save_debounce_ms = 500
//! reseed_when_empty = false
//! max_title_len = 30
//! data_dir = "/home/me/.local/share/todo-list"
//! seed_path = "/home/me/seed.json"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::MAX_TITLE_LEN;
use crate::persist::SeedPolicy;
use crate::screen::ScreenConfig;
use crate::theme::ColorScheme;
use crate::{Error, Result};

const APP_DIR: &str = "todo-list";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory for stored data. Defaults to the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Quiet time before pending changes are written.
    pub save_debounce_ms: u64,
    /// Scheme used until the user picks one.
    pub color_scheme: ColorScheme,
    /// Show the seed list again when the stored list is empty.
    pub reseed_when_empty: bool,
    pub max_title_len: usize,
    /// JSON file replacing the bundled seed list.
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            save_debounce_ms: 300,
            color_scheme: ColorScheme::Dark,
            reseed_when_empty: true,
            max_title_len: MAX_TITLE_LEN,
            seed_path: None,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Like [`AppConfig::load`], logging problems and falling back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_title_len == 0 {
            return Err(Error::Config("max_title_len must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Returns the default config file path: `<config dir>/todo-list/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Directory for stored data, if one can be resolved.
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
    }

    pub fn save_debounce(&self) -> Duration {
        Duration::from_millis(self.save_debounce_ms)
    }

    pub fn seed_policy(&self) -> SeedPolicy {
        SeedPolicy::from_reseed_flag(self.reseed_when_empty)
    }

    pub fn screen_config(&self) -> ScreenConfig {
        ScreenConfig {
            color_scheme: self.color_scheme,
            max_title_len: self.max_title_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = AppConfig::from_toml(
            r#"
            color_scheme = "light"
            save_debounce_ms = 50
            reseed_when_empty = false
            data_dir = "/tmp/todos"
            "#,
        )
        .unwrap();

        assert_eq!(config.color_scheme, ColorScheme::Light);
        assert_eq!(config.save_debounce(), Duration::from_millis(50));
        assert_eq!(config.seed_policy(), SeedPolicy::FirstRunOnly);
        assert_eq!(config.resolved_data_dir(), Some(PathBuf::from("/tmp/todos")));
        assert_eq!(config.max_title_len, MAX_TITLE_LEN);
    }

    #[test]
    fn zero_title_len_is_rejected() {
        let err = AppConfig::from_toml("max_title_len = 0").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn bad_scheme_is_rejected() {
        assert!(AppConfig::from_toml(r#"color_scheme = "blue""#).is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "save_debounce_ms = \"soon\"").unwrap();

        assert!(AppConfig::load(&path).is_err());
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
    }

    #[test]
    fn screen_config_carries_theme_and_limit() {
        let config = AppConfig {
            color_scheme: ColorScheme::Light,
            max_title_len: 12,
            ..AppConfig::default()
        };
        assert_eq!(
            config.screen_config(),
            ScreenConfig {
                color_scheme: ColorScheme::Light,
                max_title_len: 12,
            }
        );
    }
}
