//! Directory naming conventions for theme directories.

/// Prefix marking a theme directory that has not been committed yet.
pub const TEMP_PREFIX: &str = "tmp_";

/// Metadata file written in every theme directory.
pub const INFORMATION_FILE: &str = "information.json";

/// Elements description of a theme. Reserved, nothing reads or writes it yet.
pub const ELEMENTS_FILE: &str = "elements.json";

/// Unsaved elements draft left behind by an interrupted editing session.
pub const ELEMENTS_DRAFT_FILE: &str = "elements.tmp";

/// Name of a fresh, uncommitted theme directory.
pub fn temporary_dir_name(created_at: &str, base_name: &str) -> String {
    format!("{TEMP_PREFIX}{created_at}_{base_name}")
}

pub fn is_temporary_dir_name(dir_name: &str) -> bool {
    dir_name.starts_with(TEMP_PREFIX)
}

/// Listing excludes any name carrying the marker, not only prefixed ones.
pub fn carries_temp_marker(dir_name: &str) -> bool {
    dir_name.contains(TEMP_PREFIX)
}

/// Directory name with the temporary prefix removed, if it had one.
pub fn committed_dir_name(dir_name: &str) -> Option<&str> {
    dir_name.strip_prefix(TEMP_PREFIX)
}
