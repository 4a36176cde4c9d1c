use super::entity::Theme;
use super::error::{ThemeError, ThemeResult};
use super::listing::{ThemeListing, list, list_detailed};
use super::reader::read_theme;
use super::validation::{BaseNameValidator, CreatedAtValidator};
use crate::fs::{FileAccess, LocalFileAccess};
use crate::validation::Validator;
use std::io;
use std::path::{Path, PathBuf};

/// Themes below one root directory, accessed through a [`FileAccess`].
///
/// The store holds no theme state of its own; every [`Theme`] it hands out is
/// owned by the caller and passed back in for `write`, `commit` and `delete`.
#[derive(Debug, Clone)]
pub struct ThemeStore<F = LocalFileAccess> {
    root_dir: PathBuf,
    fs: F,
}

impl ThemeStore<LocalFileAccess> {
    /// Store over the local file system.
    pub fn local(root_dir: impl Into<PathBuf>) -> Self {
        Self::new(root_dir, LocalFileAccess)
    }
}

impl<F: FileAccess> ThemeStore<F> {
    pub fn new(root_dir: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            root_dir: root_dir.into(),
            fs,
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn file_access(&self) -> &F {
        &self.fs
    }

    /// Create the root directory (and its parents) if it is missing.
    pub fn ensure_root(&self) -> ThemeResult<()> {
        self.fs
            .create_dir(&self.root_dir, true)
            .map_err(|e| ThemeError::io(&self.root_dir, e))
    }

    /// Create a temporary theme and write it to disk.
    ///
    /// `base_name` and `created_at` are validated first since both end up in
    /// the directory name. An existing entry at the target directory is never
    /// reused and fails with [`ThemeError::Io`] of kind `AlreadyExists`.
    pub fn create(&self, name: &str, created_at: &str, base_name: &str) -> ThemeResult<Theme> {
        BaseNameValidator.validate(base_name)?;
        CreatedAtValidator.validate(created_at)?;

        let mut theme = Theme::new(name, created_at, self.root_dir.clone(), base_name);
        if self.fs.exists(theme.theme_dir()) {
            return Err(ThemeError::io(
                theme.theme_dir(),
                io::Error::new(io::ErrorKind::AlreadyExists, "theme directory already exists"),
            ));
        }

        theme.write(&self.fs)?;
        log::info!("Created theme '{name}' at {}", theme.theme_dir().display());
        Ok(theme)
    }

    /// [`create`](Self::create) stamped with the current time in microseconds.
    pub fn create_now(&self, name: &str, base_name: &str) -> ThemeResult<Theme> {
        let created_at = current_timestamp();
        self.create(name, &created_at, base_name)
    }

    pub fn write(&self, theme: &mut Theme) -> ThemeResult<()> {
        theme.write(&self.fs)
    }

    pub fn commit(&self, theme: &mut Theme) -> ThemeResult<()> {
        theme.commit(&self.fs)
    }

    pub fn delete(&self, theme: &Theme) -> ThemeResult<()> {
        theme.delete(&self.fs)
    }

    /// Remove a theme directory without reading its metadata, so themes with
    /// a broken information file can still be removed.
    pub fn delete_dir(&self, theme_dir: impl AsRef<Path>) -> ThemeResult<()> {
        let theme_dir = self.resolve(theme_dir);
        if !self.fs.is_dir(&theme_dir) {
            return Err(ThemeError::FileNotFound { path: theme_dir });
        }
        if theme_dir == self.root_dir || self.fs.parent_of(&theme_dir) == theme_dir {
            return Err(ThemeError::DirectoryError { path: theme_dir });
        }

        self.fs
            .delete_recursive(&theme_dir)
            .map_err(|e| ThemeError::io(&theme_dir, e))?;
        log::info!("Deleted theme directory {}", theme_dir.display());
        Ok(())
    }

    /// Read a theme directory. Relative paths are resolved against the root.
    pub fn read(&self, theme_dir: impl AsRef<Path>) -> ThemeResult<Theme> {
        read_theme(&self.fs, self.resolve(theme_dir))
    }

    /// Read the theme whose directory is the child `dir_name` of the root.
    pub fn read_named(&self, dir_name: &str) -> ThemeResult<Theme> {
        read_theme(&self.fs, self.root_dir.join(dir_name))
    }

    pub fn resolve(&self, theme_dir: impl AsRef<Path>) -> PathBuf {
        let theme_dir = theme_dir.as_ref();
        if theme_dir.is_absolute() {
            theme_dir.to_path_buf()
        } else {
            self.root_dir.join(theme_dir)
        }
    }

    /// Committed theme names in ascending creation order.
    pub fn list(&self) -> Vec<String> {
        list(&self.fs, &self.root_dir)
    }

    pub fn list_detailed(&self) -> ThemeResult<ThemeListing> {
        list_detailed(&self.fs, &self.root_dir)
    }
}

fn current_timestamp() -> String {
    chrono::Utc::now().timestamp_micros().to_string()
}
