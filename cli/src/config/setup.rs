use std::path::PathBuf;
use thiserror::Error;

const APP_DIR_NAME: &str = "watchface-themes";

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDir(String),
    #[error("Failed to determine data directory: {0}")]
    DataDir(String),
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    // Prefer ~/.config/watchface-themes on Unix-like systems
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push(APP_DIR_NAME);
            return Ok(home_path);
        }
    }

    dirs::config_dir()
        .map(|path| path.join(APP_DIR_NAME))
        .ok_or_else(|| SetupError::ConfigDir("Unable to determine config directory".to_string()))
}

/// Get the user configuration file path
pub fn get_config_file_path() -> Result<PathBuf, SetupError> {
    Ok(get_config_dir()?.join("config.toml"))
}

/// Default location of the themes root when none is configured
pub fn default_themes_dir() -> Result<PathBuf, SetupError> {
    dirs::data_dir()
        .map(|path| path.join(APP_DIR_NAME).join("themes"))
        .ok_or_else(|| SetupError::DataDir("Unable to determine data directory".to_string()))
}
