//! # Theme Module
//!
//! Everything about a single theme and the collection of themes below a
//! root directory:
//!
//! - **[`Theme`]** - The entity: metadata setters, `write`, `commit`, `delete`
//! - **[`read_theme`]** - Rebuilds a [`Theme`] from its directory
//! - **[`list`] / [`list_detailed`]** - Discovery of committed themes ordered by
//!   creation time
//! - **[`ThemeStore`]** - Facade binding a root directory to a
//!   [`FileAccess`](crate::fs::FileAccess)
//!
//! ## Lifecycle
//!
//! ```no_run
//! use store::ThemeStore;
//!
//! let store = ThemeStore::local("/home/me/.local/share/watchface-themes/themes");
//! let mut theme = store.create("Night", "1560606239456254", "night")?;
//! theme.set_name("Night Sky");
//! store.write(&mut theme)?;
//! store.commit(&mut theme)?;
//!
//! for name in store.list() {
//!     println!("{name}");
//! }
//! # Ok::<(), store::ThemeError>(())
//! ```

pub mod entity;
pub mod error;
pub mod listing;
pub mod metadata;
pub mod naming;
pub mod reader;
pub mod store;
pub mod validation;

pub use entity::Theme;
pub use error::{ThemeError, ThemeErrorKind, ThemeResult};
pub use listing::{
    SkipReason, SkippedEntry, SortedIndex, ThemeListing, ThemeSummary, list, list_detailed,
};
pub use metadata::{CREATED_AT_KEY, NAME_KEY, ThemeMetadata};
pub use reader::read_theme;
pub use store::ThemeStore;
pub use validation::{BaseNameValidator, CreatedAtValidator, ThemeValidationError};
