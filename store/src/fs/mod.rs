//! File-system capability consumed by the theme store.
//!
//! The store never touches `std::fs` directly; every operation goes through
//! [`FileAccess`] so that callers can substitute another backend (or a test
//! double that injects failures).

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

mod local;

pub use local::LocalFileAccess;

/// Flat string-to-string mapping persisted by [`FileAccess::write_key_value`].
pub type KeyValueMap = BTreeMap<String, String>;

/// Synchronous file-system backend.
///
/// All methods are blocking. Implementations are not required to be
/// thread-safe; concurrent access to the same directory is unsupported.
pub trait FileAccess {
    /// Check if a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is an existing directory.
    ///
    /// Returns false if the path doesn't exist or is not a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the names of the immediate children of a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read (missing, permission
    /// denied, not a directory, ...).
    fn list_children(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Create a directory. An already existing directory is not an error.
    fn create_dir(&self, path: &Path, intermediates: bool) -> io::Result<()>;

    /// Rename the entry at `path` within its parent directory and return the
    /// new path.
    fn rename_entry(&self, path: &Path, new_base_name: &str) -> io::Result<PathBuf>;

    /// Remove a directory and everything below it.
    fn delete_recursive(&self, path: &Path) -> io::Result<()>;

    /// Read a key-value file.
    ///
    /// A file that exists but does not hold a flat string mapping is reported
    /// with [`io::ErrorKind::InvalidData`].
    fn read_key_value(&self, path: &Path) -> io::Result<KeyValueMap>;

    /// Write a key-value file, replacing any existing content.
    fn write_key_value(&self, path: &Path, map: &KeyValueMap) -> io::Result<()>;

    /// Parent directory of `path`. A path without a parent resolves to itself.
    fn parent_of(&self, path: &Path) -> PathBuf {
        path.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| path.to_path_buf())
    }

    /// Last component of `path`, if it is valid UTF-8.
    fn base_name(&self, path: &Path) -> Option<String> {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
    }
}

impl<F: FileAccess + ?Sized> FileAccess for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_children(&self, path: &Path) -> io::Result<Vec<String>> {
        (**self).list_children(path)
    }

    fn create_dir(&self, path: &Path, intermediates: bool) -> io::Result<()> {
        (**self).create_dir(path, intermediates)
    }

    fn rename_entry(&self, path: &Path, new_base_name: &str) -> io::Result<PathBuf> {
        (**self).rename_entry(path, new_base_name)
    }

    fn delete_recursive(&self, path: &Path) -> io::Result<()> {
        (**self).delete_recursive(path)
    }

    fn read_key_value(&self, path: &Path) -> io::Result<KeyValueMap> {
        (**self).read_key_value(path)
    }

    fn write_key_value(&self, path: &Path, map: &KeyValueMap) -> io::Result<()> {
        (**self).write_key_value(path, map)
    }

    fn parent_of(&self, path: &Path) -> PathBuf {
        (**self).parent_of(path)
    }

    fn base_name(&self, path: &Path) -> Option<String> {
        (**self).base_name(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_of_root_is_itself() {
        let fs = LocalFileAccess;
        assert_eq!(fs.parent_of(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_parent_and_base_name() {
        let fs = LocalFileAccess;
        let path = Path::new("/themes/10_face");

        assert_eq!(fs.parent_of(path), PathBuf::from("/themes"));
        assert_eq!(fs.base_name(path), Some("10_face".to_string()));
        assert_eq!(fs.base_name(Path::new("/")), None);
    }
}
