//! # Watch-face Theme Store
//!
//! Core library for persisting watch-face themes as directories on disk.
//! A theme is created in a temporary, uncommitted directory, written and
//! re-written as its metadata changes, then committed (the temporary prefix is
//! stripped) or deleted. Committed themes are discovered by listing the themes
//! root, ordered by their creation timestamp.
//!
//! ## Modules
//!
//! - [`fs`] - The [`FileAccess`] capability and its local implementation
//! - [`theme`] - Theme entity, read path, listing and the [`ThemeStore`] facade
//! - [`validation`] - Input validation trait shared by validators
//!
//! ## Layout on disk
//!
//! ```text
//! <root>/
//!   tmp_<createdAt>_<baseName>/   uncommitted theme
//!     information.json
//!   <createdAt>_<baseName>/       committed theme
//!     information.json
//! ```

pub mod fs;
pub mod theme;
pub mod validation;

pub use fs::{FileAccess, LocalFileAccess};
pub use theme::{
    SkipReason, SkippedEntry, Theme, ThemeError, ThemeErrorKind, ThemeListing, ThemeResult,
    ThemeStore, ThemeSummary, list, list_detailed, read_theme,
};
pub use validation::Validator;
