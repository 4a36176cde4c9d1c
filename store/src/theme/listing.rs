//! Discovery of committed themes below a themes root.
//!
//! Listing is best-effort: entries that cannot be read are skipped rather
//! than failing the whole call. [`list_detailed`] reports what was skipped and
//! distinguishes an unreadable root from an empty one; [`list`] only returns
//! the ordered names.

use super::error::{ThemeError, ThemeResult};
use super::metadata::parse_created_at;
use super::naming::carries_temp_marker;
use super::reader::{InformationProblem, load_information};
use crate::fs::FileAccess;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Values kept in ascending order of an `f64` key.
///
/// Each insertion binary-searches for the first key greater than the new
/// one, so values with equal keys stay in insertion order.
#[derive(Debug, Clone)]
pub struct SortedIndex<T> {
    keys: Vec<f64>,
    values: Vec<T>,
}

impl<T> SortedIndex<T> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Insert `value` after every entry whose key is `<= key` and return the
    /// position it landed at.
    pub fn insert(&mut self, key: f64, value: T) -> usize {
        let index = self.keys.partition_point(|existing| *existing <= key);
        self.keys.insert(index, key);
        self.values.insert(index, value);
        index
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T> Default for SortedIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A committed theme found by a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSummary {
    pub name: String,
    pub created_at: String,
    pub dir: PathBuf,
}

/// Why a theme directory was left out of a listing.
///
/// Uncommitted directories and plain files are excluded by convention and
/// never reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum SkipReason {
    MissingInformation,
    MalformedInformation(String),
    InvalidTimestamp(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingInformation => write!(f, "information file is missing"),
            SkipReason::MalformedInformation(reason) => {
                write!(f, "information file is malformed: {reason}")
            }
            SkipReason::InvalidTimestamp(value) => write!(f, "createdAt '{value}' is not a number"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedEntry {
    pub dir_name: String,
    pub reason: SkipReason,
}

/// Outcome of scanning a themes root.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ThemeListing {
    pub themes: Vec<ThemeSummary>,
    pub skipped: Vec<SkippedEntry>,
}

impl ThemeListing {
    /// Theme names in ascending creation order.
    pub fn names(&self) -> Vec<String> {
        self.themes.iter().map(|t| t.name.clone()).collect()
    }

    pub fn into_names(self) -> Vec<String> {
        self.themes.into_iter().map(|t| t.name).collect()
    }
}

/// Scan `root_dir` for committed themes ordered by `createdAt`.
///
/// # Errors
///
/// Returns [`ThemeError::Io`] only if `root_dir` itself cannot be listed.
/// Problems with individual entries end up in [`ThemeListing::skipped`].
pub fn list_detailed<F: FileAccess>(
    fs: &F,
    root_dir: impl AsRef<Path>,
) -> ThemeResult<ThemeListing> {
    let root_dir = root_dir.as_ref();
    let children = fs
        .list_children(root_dir)
        .map_err(|e| ThemeError::io(root_dir, e))?;

    let mut index = SortedIndex::new();
    let mut skipped = Vec::new();

    for dir_name in children {
        if carries_temp_marker(&dir_name) {
            log::debug!("Skipping uncommitted theme directory {dir_name}");
            continue;
        }

        let dir = root_dir.join(&dir_name);
        if !fs.is_dir(&dir) {
            log::debug!("Skipping {dir_name}: not a directory");
            continue;
        }

        let metadata = match load_information(fs, &dir) {
            Ok(metadata) => metadata,
            Err(problem) => {
                let reason = match problem {
                    InformationProblem::Missing => SkipReason::MissingInformation,
                    InformationProblem::Malformed(reason) => {
                        SkipReason::MalformedInformation(reason)
                    }
                };
                log::warn!("Skipping theme {dir_name}: {reason}");
                skipped.push(SkippedEntry { dir_name, reason });
                continue;
            }
        };

        let Some(key) = parse_created_at(metadata.created_at()) else {
            let reason = SkipReason::InvalidTimestamp(metadata.created_at().to_string());
            log::warn!("Skipping theme {dir_name}: {reason}");
            skipped.push(SkippedEntry { dir_name, reason });
            continue;
        };

        index.insert(
            key,
            ThemeSummary {
                name: metadata.name().to_string(),
                created_at: metadata.created_at().to_string(),
                dir,
            },
        );
    }

    Ok(ThemeListing {
        themes: index.into_values(),
        skipped,
    })
}

/// Names of the committed themes below `root_dir` in ascending creation
/// order. An unreadable root yields an empty list.
pub fn list<F: FileAccess>(fs: &F, root_dir: impl AsRef<Path>) -> Vec<String> {
    match list_detailed(fs, root_dir) {
        Ok(listing) => listing.into_names(),
        Err(e) => {
            log::warn!("Theme listing failed, returning no themes: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::LocalFileAccess;
    use crate::theme::naming::INFORMATION_FILE;
    use claims::*;
    use tempfile::TempDir;

    fn write_info(root: &Path, dir_name: &str, content: &str) {
        let dir = root.join(dir_name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(INFORMATION_FILE), content).unwrap();
    }

    fn theme_info(name: &str, created_at: &str) -> String {
        format!(r#"{{"name": "{name}", "createdAt": "{created_at}"}}"#)
    }

    #[test]
    fn test_sorted_index_orders_numerically() {
        let mut index = SortedIndex::new();
        index.insert(10.0, "ten");
        index.insert(2.0, "two");
        index.insert(30.0, "thirty");

        assert_eq!(index.values(), &["two", "ten", "thirty"]);
    }

    #[test]
    fn test_sorted_index_inserts_after_equal_keys() {
        let mut index = SortedIndex::new();
        assert_eq!(index.insert(5.0, "first"), 0);
        assert_eq!(index.insert(5.0, "second"), 1);
        assert_eq!(index.insert(1.0, "early"), 0);
        assert_eq!(index.insert(5.0, "third"), 3);

        assert_eq!(index.into_values(), vec!["early", "first", "second", "third"]);
    }

    #[test]
    fn test_list_orders_by_numeric_created_at() {
        let temp = TempDir::new().unwrap();
        write_info(temp.path(), "10_b", &theme_info("ten", "10"));
        write_info(temp.path(), "2_a", &theme_info("two", "2"));
        write_info(temp.path(), "30_c", &theme_info("thirty", "30"));

        assert_eq!(list(&LocalFileAccess, temp.path()), vec!["two", "ten", "thirty"]);
    }

    #[test]
    fn test_list_detailed_reports_skipped_entries() {
        let temp = TempDir::new().unwrap();
        write_info(temp.path(), "1_ok", &theme_info("ok", "1"));
        write_info(temp.path(), "tmp_2_pending", &theme_info("pending", "2"));
        write_info(temp.path(), "3_broken", "{");
        write_info(temp.path(), "4_nokey", r#"{"name": "nokey"}"#);
        write_info(temp.path(), "5_badtime", &theme_info("badtime", "soon"));
        std::fs::create_dir(temp.path().join("6_empty")).unwrap();
        std::fs::write(temp.path().join("stray.txt"), "x").unwrap();

        let listing = assert_ok!(list_detailed(&LocalFileAccess, temp.path()));

        assert_eq!(listing.names(), vec!["ok"]);
        assert_eq!(listing.themes[0].dir, temp.path().join("1_ok"));

        let mut skipped = listing.skipped.clone();
        skipped.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));
        let names: Vec<&str> = skipped.iter().map(|s| s.dir_name.as_str()).collect();
        assert_eq!(names, vec!["3_broken", "4_nokey", "5_badtime", "6_empty"]);
        assert_matches!(&skipped[0].reason, SkipReason::MalformedInformation(_));
        assert_eq!(
            skipped[1].reason,
            SkipReason::MalformedInformation("missing key 'createdAt'".to_string())
        );
        assert_eq!(skipped[2].reason, SkipReason::InvalidTimestamp("soon".to_string()));
        assert_eq!(skipped[3].reason, SkipReason::MissingInformation);
    }

    #[test]
    fn test_unreadable_root() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let err = assert_err!(list_detailed(&LocalFileAccess, &missing));
        assert_matches!(err, ThemeError::Io { .. });
        assert!(list(&LocalFileAccess, &missing).is_empty());
    }

    #[test]
    fn test_listing_serializes_for_reports() {
        let listing = ThemeListing {
            themes: vec![ThemeSummary {
                name: "Face".to_string(),
                created_at: "10".to_string(),
                dir: PathBuf::from("/themes/10_face"),
            }],
            skipped: vec![SkippedEntry {
                dir_name: "11_bad".to_string(),
                reason: SkipReason::InvalidTimestamp("soon".to_string()),
            }],
        };

        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json["themes"][0]["createdAt"], "10");
        assert_eq!(json["skipped"][0]["dirName"], "11_bad");
        assert_eq!(json["skipped"][0]["reason"]["kind"], "invalidTimestamp");
        assert_eq!(json["skipped"][0]["reason"]["detail"], "soon");
    }

    #[test]
    fn test_empty_root_is_ok() {
        let temp = TempDir::new().unwrap();
        let listing = assert_ok!(list_detailed(&LocalFileAccess, temp.path()));
        assert!(listing.themes.is_empty());
        assert!(listing.skipped.is_empty());
    }
}
