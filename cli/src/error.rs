use std::fmt::Display;
use store::{ThemeError, ThemeErrorKind};

/// Errors surfaced by the command-line front end.
///
/// [`AppError::user_message`] is what gets printed; the [`Display`] form
/// carries the technical detail and goes to the log.
#[derive(Debug)]
pub enum AppError {
    /// A theme operation failed.
    Theme(ThemeError),

    /// Configuration could not be loaded or is invalid.
    Config(String),

    /// Writing command output failed.
    Io(std::io::Error),
}

impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Theme(e) => e.user_message(),
            AppError::Config(msg) => msg.clone(),
            AppError::Io(e) => format!("Could not write output: {e}"),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Theme(e) => match e.kind() {
                ThemeErrorKind::Invalid => 2,
                ThemeErrorKind::FileNotFound => 3,
                ThemeErrorKind::DirectoryError
                | ThemeErrorKind::InformationFileError
                | ThemeErrorKind::ElementFileError => 4,
                ThemeErrorKind::Io => 5,
            },
            AppError::Io(_) => 5,
            AppError::Config(_) => 6,
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Theme(e) => write!(f, "Theme Error: {e}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Io(e) => write!(f, "IO Error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Theme(e) => Some(e),
            AppError::Config(_) => None,
            AppError::Io(e) => Some(e),
        }
    }
}

impl From<ThemeError> for AppError {
    fn from(err: ThemeError) -> Self {
        AppError::Theme(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<crate::config::setup::SetupError> for AppError {
    fn from(err: crate::config::setup::SetupError) -> Self {
        AppError::Config(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
