use super::defaults::LOG_LEVELS;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid logging.level: '{configured}'")]
    LogLevel { configured: String },
    #[error("Invalid themes_dir: value is empty")]
    EmptyThemesDir,
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level!\n\n\
                    Your configured value: {configured}\n\
                    Valid values: {}\n\n\
                    Please update logging.level in config.toml.",
                    LOG_LEVELS.join(", ")
                )
            }
            ConfigValidationError::EmptyThemesDir => "Themes directory is empty!\n\n\
                Please set themes_dir in config.toml to a directory path, \
                or remove it to use the default location."
                .to_string(),
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<super::AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
