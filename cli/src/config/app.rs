use super::LoggingConfig;
use super::defaults::LOG_LEVELS;
use super::setup::{SetupError, default_themes_dir};
use super::validation::ConfigValidationError;
use serde::Deserialize;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    themes_dir: Option<String>,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let level = self.logging.level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if self
            .themes_dir
            .as_deref()
            .is_some_and(|dir| dir.trim().is_empty())
        {
            errors.push(ConfigValidationError::EmptyThemesDir);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Configured themes root, or the platform default
    pub fn themes_dir(&self) -> Result<PathBuf, SetupError> {
        match self.themes_dir.as_deref() {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => default_themes_dir(),
        }
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}
