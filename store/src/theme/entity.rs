use super::error::{ThemeError, ThemeResult};
use super::metadata::{CREATED_AT_KEY, NAME_KEY, ThemeMetadata, parse_created_at};
use super::naming::{
    ELEMENTS_DRAFT_FILE, INFORMATION_FILE, committed_dir_name, is_temporary_dir_name,
    temporary_dir_name,
};
use crate::fs::FileAccess;
use std::path::{Path, PathBuf};

/// One watch-face theme and the directory that stores it.
///
/// A fresh theme lives in `<root>/tmp_<createdAt>_<baseName>` until
/// [`commit`](Theme::commit) strips the prefix. `name` and `createdAt` are
/// mirrored into the metadata mapping by their setters, which also flag the
/// information file for the next [`write`](Theme::write).
#[derive(Debug, Clone)]
pub struct Theme {
    name: String,
    created_at: String,
    root_dir: PathBuf,
    theme_dir: PathBuf,
    is_temporary: bool,
    exists_on_disk: bool,
    metadata: ThemeMetadata,
    pending_metadata_write: bool,
}

impl Theme {
    /// Create an uncommitted theme below `root_dir`.
    ///
    /// Nothing is written until [`write`](Theme::write) is called.
    pub fn new(
        name: impl Into<String>,
        created_at: impl Into<String>,
        root_dir: impl Into<PathBuf>,
        base_name: &str,
    ) -> Self {
        let name = name.into();
        let created_at = created_at.into();
        let root_dir = root_dir.into();
        let theme_dir = root_dir.join(temporary_dir_name(&created_at, base_name));

        Self {
            metadata: ThemeMetadata::new(&name, &created_at),
            name,
            created_at,
            root_dir,
            theme_dir,
            is_temporary: true,
            exists_on_disk: false,
            pending_metadata_write: true,
        }
    }

    /// Same as [`Theme::new`] with the root given as a path string.
    pub fn with_root_path(
        name: impl Into<String>,
        created_at: impl Into<String>,
        root_path: &str,
        base_name: &str,
    ) -> Self {
        Self::new(name, created_at, PathBuf::from(root_path), base_name)
    }

    /// Rebuild a theme that already exists on disk at `theme_dir`.
    ///
    /// Fails with [`ThemeError::DirectoryError`] when the parent of
    /// `theme_dir` is `theme_dir` itself.
    pub fn from_existing<F: FileAccess>(
        fs: &F,
        name: impl Into<String>,
        created_at: impl Into<String>,
        theme_dir: impl Into<PathBuf>,
    ) -> ThemeResult<Self> {
        let name = name.into();
        let created_at = created_at.into();
        let metadata = ThemeMetadata::new(&name, &created_at);
        Self::from_metadata(fs, metadata, theme_dir.into())
    }

    pub(crate) fn from_metadata<F: FileAccess>(
        fs: &F,
        metadata: ThemeMetadata,
        theme_dir: PathBuf,
    ) -> ThemeResult<Self> {
        let root_dir = fs.parent_of(&theme_dir);
        if root_dir == theme_dir {
            return Err(ThemeError::DirectoryError { path: theme_dir });
        }

        let is_temporary = fs
            .base_name(&theme_dir)
            .is_some_and(|dir_name| is_temporary_dir_name(&dir_name));

        Ok(Self {
            name: metadata.name().to_string(),
            created_at: metadata.created_at().to_string(),
            metadata,
            root_dir,
            theme_dir,
            is_temporary,
            exists_on_disk: true,
            pending_metadata_write: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Numeric creation time, `None` if `createdAt` is not a finite number.
    pub fn created_at_value(&self) -> Option<f64> {
        parse_created_at(&self.created_at)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn theme_dir(&self) -> &Path {
        &self.theme_dir
    }

    pub fn information_path(&self) -> PathBuf {
        self.theme_dir.join(INFORMATION_FILE)
    }

    pub fn is_temporary(&self) -> bool {
        self.is_temporary
    }

    pub fn exists_on_disk(&self) -> bool {
        self.exists_on_disk
    }

    pub fn metadata(&self) -> &ThemeMetadata {
        &self.metadata
    }

    pub fn has_pending_metadata_write(&self) -> bool {
        self.pending_metadata_write
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.metadata.set(NAME_KEY, &self.name);
        self.pending_metadata_write = true;
    }

    /// Changes the stored timestamp only; the directory keeps its name.
    pub fn set_created_at(&mut self, created_at: impl Into<String>) {
        self.created_at = created_at.into();
        self.metadata.set(CREATED_AT_KEY, &self.created_at);
        self.pending_metadata_write = true;
    }

    /// Set an arbitrary metadata entry. The known keys are routed to their
    /// dedicated setters.
    pub fn set_property(&mut self, key: &str, value: impl Into<String>) {
        match key {
            NAME_KEY => self.set_name(value),
            CREATED_AT_KEY => self.set_created_at(value),
            _ => {
                let value: String = value.into();
                self.metadata.set(key, &value);
                self.pending_metadata_write = true;
            }
        }
    }

    /// Persist the theme: create its directory on first write, rewrite the
    /// information file if it changed, then the elements.
    pub fn write<F: FileAccess>(&mut self, fs: &F) -> ThemeResult<()> {
        if !self.exists_on_disk {
            fs.create_dir(&self.theme_dir, true)
                .map_err(|e| ThemeError::io(&self.theme_dir, e))?;
        }

        if self.pending_metadata_write {
            self.write_information(fs)?;
            self.pending_metadata_write = false;
        }

        self.write_elements(fs)?;
        self.exists_on_disk = true;
        Ok(())
    }

    fn write_information<F: FileAccess>(&self, fs: &F) -> ThemeResult<()> {
        let path = self.information_path();
        log::debug!("Writing theme information to {}", path.display());
        fs.write_key_value(&path, self.metadata.as_map())
            .map_err(|e| ThemeError::io(path, e))
    }

    // Elements have no on-disk format yet. Once they do, they belong in
    // `ELEMENTS_FILE` and failures map to `ThemeError::ElementFileError`.
    fn write_elements<F: FileAccess>(&self, _fs: &F) -> ThemeResult<()> {
        Ok(())
    }

    /// Make the theme permanent by stripping the temporary prefix from its
    /// directory and rewriting it.
    ///
    /// There is no rollback: if the rename succeeds and the following write
    /// fails, the directory stays renamed and the write error is returned.
    pub fn commit<F: FileAccess>(&mut self, fs: &F) -> ThemeResult<()> {
        if !fs.is_dir(&self.theme_dir) {
            return Err(ThemeError::FileNotFound {
                path: self.theme_dir.clone(),
            });
        }

        let dir_name = fs.base_name(&self.theme_dir).unwrap_or_default();
        if let Some(committed) = committed_dir_name(&dir_name) {
            let renamed = fs
                .rename_entry(&self.theme_dir, committed)
                .map_err(|e| ThemeError::io(&self.theme_dir, e))?;
            log::info!(
                "Committed theme '{}': {} -> {}",
                self.name,
                self.theme_dir.display(),
                renamed.display()
            );
            self.theme_dir = renamed;
        }

        self.write(fs)?;
        self.is_temporary = false;
        Ok(())
    }

    /// Remove the theme directory and everything in it.
    pub fn delete<F: FileAccess>(&self, fs: &F) -> ThemeResult<()> {
        fs.delete_recursive(&self.theme_dir)
            .map_err(|e| ThemeError::io(&self.theme_dir, e))?;
        log::info!("Deleted theme '{}' at {}", self.name, self.theme_dir.display());
        Ok(())
    }

    /// Whether an elements draft from an unfinished session is lying next to
    /// the theme. The draft itself is never read.
    pub fn has_unsaved_draft<F: FileAccess>(&self, fs: &F) -> bool {
        fs.exists(&self.theme_dir.join(ELEMENTS_DRAFT_FILE))
    }
}
