use super::{FileAccess, KeyValueMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// [`FileAccess`] over the local file system.
///
/// Key-value files are stored as pretty-printed JSON objects whose values are
/// all strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileAccess;

impl FileAccess for LocalFileAccess {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_children(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::debug!("Ignoring non UTF-8 entry {raw:?} in {}", path.display()),
            }
        }
        Ok(names)
    }

    fn create_dir(&self, path: &Path, intermediates: bool) -> io::Result<()> {
        if intermediates {
            return fs::create_dir_all(path);
        }

        match fs::create_dir(path) {
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            other => other,
        }
    }

    fn rename_entry(&self, path: &Path, new_base_name: &str) -> io::Result<PathBuf> {
        let target = self.parent_of(path).join(new_base_name);
        fs::rename(path, &target)?;
        Ok(target)
    }

    fn delete_recursive(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }

    fn read_key_value(&self, path: &Path) -> io::Result<KeyValueMap> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write_key_value(&self, path: &Path, map: &KeyValueMap) -> io::Result<()> {
        let json = serde_json::to_string_pretty(map).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
