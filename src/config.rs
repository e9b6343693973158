//! Configuration file parser for ~/.config/wikiswipe/config.toml.
//!
//! The config file is optional; a missing file yields `Config::default()`.
//! Unknown keys are ignored by serde, though we log a warning when the file
//! contains potential typos.
use crate::catalog::{self, Category};
use crate::feed::{DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE};
use crate::wiki::DEFAULT_API_BASE;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Default article page base; titles are appended as a path segment.
pub const DEFAULT_ARTICLE_BASE: &str = "https://en.wikipedia.org/wiki/";

const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Logical pixels per terminal row when converting drags into touch distances.
const DEFAULT_ROW_HEIGHT_PX: u16 = 16;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme variant name ("dark" or "light").
    pub theme: String,

    /// Search endpoint. Must be HTTPS (localhost excepted).
    pub api_base_url: String,

    /// Base for "Read More" links.
    pub article_base_url: String,

    /// Articles requested per fetch, clamped to 1..=50.
    pub batch_size: usize,

    /// Category id selected at startup.
    pub default_category: String,

    /// Per-request timeout in seconds. 0 = no timeout.
    pub request_timeout_secs: u64,

    /// Logical pixel height of one terminal row for drag gestures.
    pub row_height_px: u16,

    /// Custom keybinding overrides. Keys are action names, values are key strings.
    pub keybindings: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            api_base_url: DEFAULT_API_BASE.to_string(),
            article_base_url: DEFAULT_ARTICLE_BASE.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            default_category: catalog::DEFAULT_CATEGORY_ID.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            row_height_px: DEFAULT_ROW_HEIGHT_PX,
            keybindings: HashMap::new(),
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 8] = [
        "theme",
        "api_base_url",
        "article_base_url",
        "batch_size",
        "default_category",
        "request_timeout_secs",
        "row_height_px",
        "keybindings",
    ];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            theme = %config.theme,
            batch_size = config.batch_size,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Request timeout, `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// Batch size clamped to the accepted range.
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.clamp(1, MAX_BATCH_SIZE)
    }

    /// Row height, never zero.
    pub fn row_height(&self) -> f64 {
        f64::from(self.row_height_px.max(1))
    }

    /// Resolve `default_category`, falling back to the built-in default for
    /// unknown ids.
    pub fn startup_category(&self) -> &'static Category {
        catalog::find(&self.default_category).unwrap_or_else(|| {
            tracing::warn!(
                category = %self.default_category,
                "Unknown default_category in config, using built-in default"
            );
            catalog::default_category()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("wikiswipe_config_test_{}", name));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.api_base_url, "https://en.wikipedia.org/w/api.php");
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.default_category, "science");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(20)));
        assert_eq!(config.row_height_px, 16);
        assert!(config.keybindings.is_empty());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("/tmp/wikiswipe_test_nonexistent_config.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_empty_file_returns_default() {
        let path = write_config("empty", "");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "dark");
        cleanup(&path);
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let path = write_config("partial", "theme = \"light\"\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.batch_size, 10); // default
        assert_eq!(config.default_category, "science"); // default
        cleanup(&path);
    }

    #[test]
    fn test_full_config() {
        let content = r#"
theme = "light"
api_base_url = "http://localhost:8080/w/api.php"
article_base_url = "https://de.wikipedia.org/wiki/"
batch_size = 25
default_category = "chess"
request_timeout_secs = 0
row_height_px = 20

[keybindings]
quit = "Ctrl+q"
advance = "n"
"#;
        let path = write_config("full", content);

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.api_base_url, "http://localhost:8080/w/api.php");
        assert_eq!(config.article_base_url, "https://de.wikipedia.org/wiki/");
        assert_eq!(config.effective_batch_size(), 25);
        assert_eq!(config.startup_category().id, "chess");
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.row_height(), 20.0);
        assert_eq!(
            config.keybindings.get("quit").map(String::as_str),
            Some("Ctrl+q")
        );
        assert_eq!(
            config.keybindings.get("advance").map(String::as_str),
            Some("n")
        );
        cleanup(&path);
    }

    #[test]
    fn test_batch_size_clamped() {
        let mut config = Config::default();
        config.batch_size = 0;
        assert_eq!(config.effective_batch_size(), 1);
        config.batch_size = 999;
        assert_eq!(config.effective_batch_size(), 50);
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let mut config = Config::default();
        config.default_category = "health".to_string();
        assert_eq!(config.startup_category().id, "science");
    }

    #[test]
    fn test_zero_row_height_is_one() {
        let mut config = Config::default();
        config.row_height_px = 0;
        assert_eq!(config.row_height(), 1.0);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let path = write_config("invalid", "this is not [valid toml");

        let result = Config::load(&path);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Invalid TOML"));
        cleanup(&path);
    }

    #[test]
    fn test_unknown_keys_accepted() {
        let content = r#"
theme = "dark"
totally_fake_key = "should not fail"
another_unknown = 42
"#;
        let path = write_config("unknown", content);

        // Should succeed (unknown keys ignored)
        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "dark");
        cleanup(&path);
    }

    #[test]
    fn test_wrong_type_returns_error() {
        // batch_size should be an integer
        let path = write_config("wrongtype", "batch_size = \"ten\"\n");
        assert!(Config::load(&path).is_err());
        cleanup(&path);
    }

    #[test]
    fn test_whitespace_only_file_returns_default() {
        let path = write_config("whitespace", "   \n  \n  ");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "dark");
        cleanup(&path);
    }

    #[test]
    fn test_too_large_file_rejected() {
        // Just over 1MB
        let path = write_config("too_large", &"a".repeat(1_048_577));

        let result = Config::load(&path);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge(_)));
        assert!(err.to_string().contains("too large"));
        cleanup(&path);
    }

    #[test]
    fn test_file_at_size_limit_accepted() {
        let mut content = "theme = \"dark\"\n".to_string();
        // Pad to exactly 1MB with TOML comments
        while content.len() < 1_048_576 - 20 {
            content.push_str("# padding comment\n");
        }
        content.truncate(1_048_576);
        let path = write_config("at_limit", &content);

        assert!(Config::load(&path).is_ok());
        cleanup(&path);
    }
}
