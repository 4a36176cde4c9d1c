use claims::*;
use std::path::Path;
use store::theme::naming::INFORMATION_FILE;
use store::{FileAccess, LocalFileAccess, Theme, ThemeError, ThemeStore, read_theme};
use tempfile::TempDir;

fn store_in(temp: &TempDir) -> ThemeStore {
    ThemeStore::local(temp.path())
}

fn dir_names(root: &Path) -> Vec<String> {
    let mut names = LocalFileAccess.list_children(root).unwrap();
    names.sort();
    names
}

#[test]
fn test_write_then_read_round_trip() {
    let temp = TempDir::new().unwrap();
    let fs = LocalFileAccess;
    let mut theme = Theme::new("Ocean", "1560606239456254", temp.path(), "ocean");

    assert_ok!(theme.write(&fs));

    let info = fs.read_key_value(&theme.theme_dir().join(INFORMATION_FILE)).unwrap();
    assert_eq!(info["name"], "Ocean");
    assert_eq!(info["createdAt"], "1560606239456254");

    let read = assert_ok!(read_theme(&fs, theme.theme_dir()));
    assert_eq!(read.name(), "Ocean");
    assert_eq!(read.created_at(), "1560606239456254");
    assert_eq!(read.root_dir(), temp.path());
    assert!(read.is_temporary());
    assert!(read.exists_on_disk());
    assert!(!read.has_pending_metadata_write());
}

#[test]
fn test_full_lifecycle_through_store() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    let mut theme = assert_ok!(store.create("Night", "20", "night"));
    assert_eq!(dir_names(temp.path()), vec!["tmp_20_night"]);
    assert!(store.list().is_empty());

    theme.set_name("Night Sky");
    assert_ok!(store.write(&mut theme));
    assert_ok!(store.commit(&mut theme));

    assert_eq!(dir_names(temp.path()), vec!["20_night"]);
    assert!(!theme.is_temporary());
    assert_eq!(store.list(), vec!["Night Sky"]);

    let read = assert_ok!(store.read("20_night"));
    assert_eq!(read.name(), "Night Sky");
    assert!(!read.is_temporary());

    assert_ok!(store.delete(&theme));
    assert!(dir_names(temp.path()).is_empty());
    let err = assert_err!(store.read("20_night"));
    assert_matches!(err, ThemeError::FileNotFound { .. });
}

#[test]
fn test_commit_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    let mut theme = store.create("Face", "10", "face").unwrap();

    assert_ok!(store.commit(&mut theme));
    assert_ok!(store.commit(&mut theme));

    assert_eq!(dir_names(temp.path()), vec!["10_face"]);
    assert!(!theme.is_temporary());
}

#[test]
fn test_commit_of_theme_read_from_temporary_directory() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.create("Face", "10", "face").unwrap();

    let mut reopened = assert_ok!(store.read("tmp_10_face"));
    assert!(reopened.is_temporary());
    assert_ok!(store.commit(&mut reopened));

    assert_eq!(reopened.theme_dir(), temp.path().join("10_face"));
    assert_eq!(store.list(), vec!["Face"]);
}

#[test]
fn test_commit_of_deleted_theme_fails() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    let mut theme = store.create("Face", "10", "face").unwrap();
    store.delete(&theme).unwrap();

    let err = assert_err!(store.commit(&mut theme));
    assert_matches!(err, ThemeError::FileNotFound { .. });
    assert_eq!(err.user_message(), "\"tmp_10_face\" Not found!");
}

#[test]
fn test_from_existing_root_directory_is_rejected() {
    let err = assert_err!(Theme::from_existing(&LocalFileAccess, "Face", "10", "/"));
    assert_matches!(err, ThemeError::DirectoryError { .. });
}

#[test]
fn test_read_missing_information_file() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("10_face")).unwrap();

    let err = assert_err!(store_in(&temp).read("10_face"));
    assert_matches!(err, ThemeError::InformationFileError { .. });
}

#[test]
fn test_list_orders_numerically_and_skips_broken_entries() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    for (name, created_at, base) in [("B", "10", "b"), ("A", "2", "a"), ("C", "30", "c")] {
        let mut theme = store.create(name, created_at, base).unwrap();
        store.commit(&mut theme).unwrap();
    }
    store.create("Draft", "1", "draft").unwrap();
    std::fs::create_dir(temp.path().join("5_empty")).unwrap();
    std::fs::create_dir(temp.path().join("6_broken")).unwrap();
    std::fs::write(temp.path().join("6_broken").join(INFORMATION_FILE), "{").unwrap();

    assert_eq!(store.list(), vec!["A", "B", "C"]);

    let listing = assert_ok!(store.list_detailed());
    assert_eq!(listing.skipped.len(), 2);
}

#[test]
fn test_list_of_missing_root_is_empty() {
    let temp = TempDir::new().unwrap();
    let store = ThemeStore::local(temp.path().join("missing"));

    assert!(store.list().is_empty());
    assert_err!(store.list_detailed());

    assert_ok!(store.ensure_root());
    assert_ok!(store.list_detailed());
}

#[test]
fn test_extra_metadata_survives_rewrite() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    let mut theme = store.create("Face", "10", "face").unwrap();
    theme.set_property("author", "someone");
    store.write(&mut theme).unwrap();
    store.commit(&mut theme).unwrap();

    let mut read = store.read("10_face").unwrap();
    read.set_name("Renamed");
    store.write(&mut read).unwrap();

    let read = store.read("10_face").unwrap();
    assert_eq!(read.name(), "Renamed");
    assert_eq!(read.metadata().get("author"), Some("someone"));
}
