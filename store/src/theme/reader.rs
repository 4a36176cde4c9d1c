use super::entity::Theme;
use super::error::{ThemeError, ThemeResult};
use super::metadata::ThemeMetadata;
use super::naming::INFORMATION_FILE;
use crate::fs::FileAccess;
use std::fmt;
use std::io;
use std::path::Path;

/// Why an information file could not be turned into metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InformationProblem {
    Missing,
    Malformed(String),
}

impl fmt::Display for InformationProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InformationProblem::Missing => write!(f, "file is missing"),
            InformationProblem::Malformed(reason) => write!(f, "{reason}"),
        }
    }
}

pub(crate) fn load_information<F: FileAccess>(
    fs: &F,
    theme_dir: &Path,
) -> Result<ThemeMetadata, InformationProblem> {
    let path = theme_dir.join(INFORMATION_FILE);
    let map = fs.read_key_value(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InformationProblem::Missing,
        _ => InformationProblem::Malformed(e.to_string()),
    })?;

    ThemeMetadata::from_map(map)
        .map_err(|key| InformationProblem::Malformed(format!("missing key '{key}'")))
}

/// Read the theme stored in `theme_dir`.
///
/// # Errors
///
/// - [`ThemeError::FileNotFound`] if `theme_dir` is not a directory
/// - [`ThemeError::InformationFileError`] if the information file is absent,
///   unparsable, lacks `name`/`createdAt`, or holds non-string values
/// - [`ThemeError::DirectoryError`] if `theme_dir` has no distinct parent
///
/// An elements draft next to the information file is ignored here; see
/// [`Theme::has_unsaved_draft`].
pub fn read_theme<F: FileAccess>(fs: &F, theme_dir: impl AsRef<Path>) -> ThemeResult<Theme> {
    let theme_dir = theme_dir.as_ref();
    if !fs.is_dir(theme_dir) {
        return Err(ThemeError::FileNotFound {
            path: theme_dir.to_path_buf(),
        });
    }

    let metadata = load_information(fs, theme_dir).map_err(|problem| {
        ThemeError::InformationFileError {
            path: theme_dir.join(INFORMATION_FILE),
            reason: problem.to_string(),
        }
    })?;

    Theme::from_metadata(fs, metadata, theme_dir.to_path_buf())
}
