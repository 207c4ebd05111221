//! Application configuration loaded from an optional TOML file
//!
//! The file only carries UI preferences; game rules are fixed. A missing
//! file is not an error, and the application never writes the file back.

use std::path::Path;

use crate::engine::Difficulty;
use crate::error::ConfigError;

/// File looked up in the working directory at startup.
pub const CONFIG_FILE: &str = "gomoku.toml";

/// Delay before the CPU reply appears, when the file does not set one.
pub const DEFAULT_CPU_DELAY_MS: u64 = 300;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Difficulty preselected when the application starts.
    pub difficulty: Difficulty,
    /// How long the CPU pretends to think, in milliseconds.
    pub cpu_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            difficulty: Difficulty::default(),
            cpu_delay_ms: DEFAULT_CPU_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cpu_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "cpu_delay_ms must be <= 10000".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// an example config file).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.cpu_delay_ms, DEFAULT_CPU_DELAY_MS);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("cpu_delay_ms = 750").unwrap();
        assert_eq!(config.cpu_delay_ms, 750);
        assert_eq!(config.difficulty, Difficulty::default());
    }

    #[test]
    fn test_difficulty_parses_from_name() {
        let config: AppConfig = toml::from_str(r#"difficulty = "Minimax""#).unwrap();
        assert_eq!(config.difficulty, Difficulty::Minimax);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.cpu_delay_ms, AppConfig::default().cpu_delay_ms);
        assert_eq!(config.difficulty, AppConfig::default().difficulty);
    }

    #[test]
    fn test_validation_rejects_long_delay() {
        let mut config = AppConfig::default();
        config.cpu_delay_ms = 10_001;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_gomoku.toml")).unwrap();
        assert_eq!(config.cpu_delay_ms, DEFAULT_CPU_DELAY_MS);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomoku.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
difficulty = "Pattern"
cpu_delay_ms = 100
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.difficulty, Difficulty::Pattern);
        assert_eq!(config.cpu_delay_ms, 100);
    }

    #[test]
    fn test_load_rejects_invalid_delay() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomoku.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "cpu_delay_ms = 60000").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config
            .validate()
            .expect("roundtripped config should be valid");
    }
}
