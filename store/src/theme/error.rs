use super::validation::ThemeValidationError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by theme construction, persistence and discovery.
///
/// Reads and writes of a specific theme fail fast with one of these variants;
/// nothing is retried. Listing is best-effort and only surfaces
/// [`ThemeError::Io`] from [`list_detailed`](crate::theme::list_detailed) when
/// the themes root itself cannot be read.
///
/// # Examples
///
/// ```no_run
/// use store::{LocalFileAccess, ThemeError, read_theme};
///
/// match read_theme(&LocalFileAccess, "/themes/1560606239456254_face") {
///     Ok(theme) => println!("{}", theme.name()),
///     Err(ThemeError::FileNotFound { path }) => eprintln!("{} is gone", path.display()),
///     Err(e) => eprintln!("{}", e.user_message()),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme directory (or another expected entry) does not exist.
    #[error("Theme directory not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The theme directory resolves to its own parent.
    #[error("Theme directory {} has no distinct parent directory", path.display())]
    DirectoryError { path: PathBuf },

    /// The information file is missing, unreadable or incomplete.
    #[error("Invalid information file {}: {reason}", path.display())]
    InformationFileError { path: PathBuf, reason: String },

    /// Reserved for failures of the elements description.
    #[error("Invalid elements file {}: {reason}", path.display())]
    ElementFileError { path: PathBuf, reason: String },

    /// Input for a new theme was rejected before touching the disk.
    #[error(transparent)]
    Invalid(#[from] ThemeValidationError),

    /// An underlying file-system operation failed.
    #[error("File system operation on {} failed: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Category of a [`ThemeError`], used to pick a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeErrorKind {
    FileNotFound,
    DirectoryError,
    InformationFileError,
    ElementFileError,
    Invalid,
    Io,
}

impl ThemeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ThemeError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ThemeErrorKind {
        match self {
            ThemeError::FileNotFound { .. } => ThemeErrorKind::FileNotFound,
            ThemeError::DirectoryError { .. } => ThemeErrorKind::DirectoryError,
            ThemeError::InformationFileError { .. } => ThemeErrorKind::InformationFileError,
            ThemeError::ElementFileError { .. } => ThemeErrorKind::ElementFileError,
            ThemeError::Invalid(_) => ThemeErrorKind::Invalid,
            ThemeError::Io { .. } => ThemeErrorKind::Io,
        }
    }

    /// Message suitable for an alert shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ThemeError::FileNotFound { path } => {
                format!("\"{}\" Not found!", display_name(path))
            }
            ThemeError::DirectoryError { .. } => {
                "Something wrong with theme directory.".to_string()
            }
            ThemeError::InformationFileError { .. } => {
                "Theme's information file has some problems.".to_string()
            }
            ThemeError::ElementFileError { .. } => {
                "Theme's elements file has some problems.".to_string()
            }
            ThemeError::Invalid(e) => e.user_message(),
            ThemeError::Io { path, source } => {
                format!("Could not access \"{}\": {source}", display_name(path))
            }
        }
    }
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Result type alias for theme operations
pub type ThemeResult<T> = Result<T, ThemeError>;
