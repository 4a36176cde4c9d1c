use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub mod app;
pub mod defaults;
pub mod setup;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Environment variable prefix, e.g. `WATCHFACE_THEMES_DIR`
pub const ENV_PREFIX: &str = "WATCHFACE";

static CONFIG: OnceLock<ConfigLoadResult> = OnceLock::new();

/// Configuration loaded once from the default locations
pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(load_config)
}

fn load_config() -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut files = Vec::new();
    match setup::get_config_file_path() {
        Ok(path) => files.push(path),
        Err(e) => log::debug!("No user config directory: {e}"),
    }
    files.push(PathBuf::from("config.toml"));

    load_config_from(&files, default_environment())
}

fn default_environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

/// Build the configuration from the embedded defaults, the optional `files`
/// (later ones win) and `env`, then validate it.
pub fn load_config_from(files: &[PathBuf], env: Environment) -> ConfigLoadResult {
    let mut builder = Config::builder()
        .add_source(File::from_str(defaults::DEFAULT_CONFIG, FileFormat::Toml));
    for path in files {
        builder = builder.add_source(File::from(path.as_path()).required(false));
    }

    let config = match builder.add_source(env).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::DeserializeError(format!(
                    "Configuration validation failed:\n{}",
                    error_messages.join("\n\n")
                ));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref().map(Path::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        default_environment().source(Some(source))
    }

    fn expect_success(result: ConfigLoadResult) -> AppConfig {
        match result {
            ConfigLoadResult::Success(config) => *config,
            ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => {
                panic!("Expected config to load, got: {e}")
            }
        }
    }

    #[test]
    fn test_defaults_only() {
        let config = expect_success(load_config_from(&[], env(&[])));

        assert_eq!(config.logging().level(), "warn");
        assert!(config.logging().file().is_none());
    }

    #[test]
    fn test_file_then_environment_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "themes_dir = \"/srv/themes\"\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = expect_success(load_config_from(std::slice::from_ref(&path), env(&[])));
        assert_eq!(config.themes_dir().unwrap(), PathBuf::from("/srv/themes"));
        assert_eq!(config.logging().level(), "debug");

        let config = expect_success(load_config_from(
            &[path],
            env(&[
                ("WATCHFACE_THEMES_DIR", "/tmp/other"),
                ("WATCHFACE_LOGGING__LEVEL", "trace"),
            ]),
        ));
        assert_eq!(config.themes_dir().unwrap(), PathBuf::from("/tmp/other"));
        assert_eq!(config.logging().level(), "trace");
    }

    #[test]
    fn test_missing_files_are_optional() {
        let temp = TempDir::new().unwrap();
        let result = load_config_from(&[temp.path().join("absent.toml")], env(&[]));
        assert!(matches!(result, ConfigLoadResult::Success(_)));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let result = load_config_from(
            &[],
            env(&[("WATCHFACE_LOGGING__LEVEL", "loud"), ("WATCHFACE_THEMES_DIR", " ")]),
        );

        match result {
            ConfigLoadResult::DeserializeError(message) => {
                assert!(message.contains("Unknown log level"));
                assert!(message.contains("Themes directory is empty"));
            }
            other => panic!("Expected validation failure, got {other:?}"),
        }
    }
}
