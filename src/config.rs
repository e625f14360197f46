// Configuration for the card viewer
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/feedcard/config.toml)
// 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Refresh interval in milliseconds
    /// Keeps the relative timestamp label ("há x minutos") from going stale
    pub tick_ms: u64,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    theme: Option<String>,
    tick_ms: Option<u64>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/feedcard/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("feedcard").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = r#"# feedcard configuration
# Uncomment and modify options as needed

# Theme: auto, dracula, nord, gruvbox
# theme = "auto"

# Refresh interval in milliseconds for the relative timestamp label
# tick_ms = 1000

# Logging configuration
# [logging]
# level = "info"  # trace, debug, info, warn, error (RUST_LOG env var overrides this)
"#;

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    fn parse_file_config(contents: &str) -> Result<FileConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# feedcard configuration

# Theme: auto, dracula, nord, gruvbox
theme = "{theme}"

# Refresh interval in milliseconds for the relative timestamp label
tick_ms = {tick}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
"#,
            theme = self.theme,
            tick = self.tick_ms,
            log_level = self.logging.level,
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };
        self.write_to(&path)
    }

    /// Write this config to an explicit path, creating parent directories
    fn write_to(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml())
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();

        // Theme: env > file > default
        let theme = std::env::var("FEEDCARD_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or_else(|| "auto".to_string());

        // Tick interval: env > file > default (1s keeps the relative label fresh)
        let tick_ms = std::env::var("FEEDCARD_TICK_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.tick_ms)
            .unwrap_or(1_000);

        // Logging settings: file config only (RUST_LOG env var handled in main.rs)
        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or_else(|| "info".to_string()),
        };

        Self {
            theme,
            tick_ms,
            logging,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            tick_ms: 1_000,
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_config_parses_all_sections() {
        let file = Config::parse_file_config(
            r#"
            theme = "nord"
            tick_ms = 250

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(file.theme.as_deref(), Some("nord"));
        assert_eq!(file.tick_ms, Some(250));
        assert_eq!(file.logging.unwrap().level.as_deref(), Some("debug"));
    }

    #[test]
    fn empty_file_config_falls_back_to_none() {
        let file = Config::parse_file_config("").unwrap();
        assert!(file.theme.is_none());
        assert!(file.tick_ms.is_none());
        assert!(file.logging.is_none());
    }

    #[test]
    fn write_to_creates_directories_and_round_trips() {
        let dir = std::env::temp_dir().join("feedcard-config-write-test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("config.toml");

        Config::default().write_to(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let file = Config::parse_file_config(&contents).unwrap();
        assert_eq!(file.theme.as_deref(), Some("auto"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn default_round_trips_through_toml() {
        let config = Config::default();
        let file = Config::parse_file_config(&config.to_toml()).unwrap();
        assert_eq!(file.theme.as_deref(), Some("auto"));
        assert_eq!(file.tick_ms, Some(1_000));
        assert_eq!(file.logging.unwrap().level.as_deref(), Some("info"));
    }
}
