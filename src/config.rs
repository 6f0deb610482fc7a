//! Configuration file support for listpick.
//!
//! Configuration is loaded from `~/.config/listpick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/listpick/config.toml
//! pop_on_select = false
//! indicator = "●"
//! initial_framework = "cursive"
//!
//! # Overrides for localizable titles
//! [strings]
//! "accent.red" = "Rouge"
//! "picker.accent" = "Couleur d'accent"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ListpickError, Result};

const POP_ON_SELECT_ENV: &str = "LISTPICK_POP_ON_SELECT";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Return to the form after choosing a row
    pub pop_on_select: Option<bool>,

    /// Glyph marking the selected row
    pub indicator: Option<String>,

    /// Id of the framework selected at startup
    pub initial_framework: Option<String>,

    /// Localized strings, keyed by title key
    pub strings: HashMap<String, String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Load from `path`, warning and falling back to defaults on failure.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Load from `path`, reporting read and parse failures.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ListpickError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("listpick")
    }

    /// Apply the environment, then CLI overrides.
    ///
    /// CLI arguments take precedence over the environment, which takes
    /// precedence over config file values.
    pub fn with_overrides(self, pop_on_select: Option<bool>) -> Self {
        let env = std::env::var(POP_ON_SELECT_ENV).ok();
        self.layered(env.as_deref(), pop_on_select)
    }

    /// Layer an environment value and a CLI value over the file values.
    fn layered(mut self, env_pop_on_select: Option<&str>, cli_pop_on_select: Option<bool>) -> Self {
        if let Some(value) = env_pop_on_select.and_then(parse_flag) {
            self.pop_on_select = Some(value);
        }
        if cli_pop_on_select.is_some() {
            self.pop_on_select = cli_pop_on_select;
        }
        self
    }

    /// Whether choosing a row navigates back (default true).
    pub fn pop_on_select(&self) -> bool {
        self.pop_on_select.unwrap_or(true)
    }

    /// Get the selection indicator glyph.
    pub fn indicator(&self) -> &str {
        self.indicator
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("✓")
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.pop_on_select.is_none());
        assert!(config.initial_framework.is_none());
        assert!(config.strings.is_empty());
        assert_eq!(config.indicator(), "✓");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            pop_on_select = false
            indicator = "●"
            initial_framework = "cursive"

            [strings]
            "accent.red" = "Rouge"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.pop_on_select, Some(false));
        assert!(!config.pop_on_select());
        assert_eq!(config.indicator(), "●");
        assert_eq!(config.initial_framework.as_deref(), Some("cursive"));
        assert_eq!(config.strings.get("accent.red").map(String::as_str), Some("Rouge"));
    }

    #[test]
    fn test_cli_override_wins() {
        let config: Config = toml::from_str("pop_on_select = true").unwrap();
        let config = config.layered(Some("true"), Some(false));
        assert!(!config.pop_on_select());

        let config = Config::default().layered(None, None);
        assert!(config.pop_on_select.is_none());
        assert!(config.pop_on_select());
    }

    #[test]
    fn test_env_beats_file() {
        let file: Config = toml::from_str("pop_on_select = true").unwrap();
        assert!(!file.clone().layered(Some("false"), None).pop_on_select());

        // Unparseable values leave the file setting alone
        assert!(file.clone().layered(Some("maybe"), None).pop_on_select());

        let file: Config = toml::from_str("pop_on_select = false").unwrap();
        assert!(!file.clone().layered(None, None).pop_on_select());
        assert!(file.layered(Some("1"), None).pop_on_select());
    }

    #[test]
    fn test_env_var_is_read() {
        // Only this test touches the variable
        unsafe { std::env::set_var(POP_ON_SELECT_ENV, "off") };
        let config: Config = toml::from_str("pop_on_select = true").unwrap();
        let from_env = config.clone().with_overrides(None).pop_on_select();
        let from_cli = config.with_overrides(Some(true)).pop_on_select();
        unsafe { std::env::remove_var(POP_ON_SELECT_ENV) };

        assert!(!from_env);
        assert!(from_cli);
    }

    #[test]
    fn test_empty_indicator_falls_back() {
        let config: Config = toml::from_str(r#"indicator = """#).unwrap();
        assert_eq!(config.indicator(), "✓");
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load_or_default(Path::new("/nonexistent/listpick/config.toml"));
        assert_eq!(config, Config::default());
    }
}
