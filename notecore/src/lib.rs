//! notecore — shared library for the Notepad editor
//!
//! Everything here runs without a window: the document model, the large
//! file guard, clipboard access, settings, theming and logger setup.

pub mod clipboard;
pub mod document;
pub mod error;
pub mod guard;
pub mod logging;
pub mod settings;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_support;

pub use document::{Document, Selection};
pub use error::{ConfigError, FileError};
pub use guard::{open_guarded, ConfirmLargeFile, OpenOutcome, LARGE_FILE_THRESHOLD};
pub use settings::Settings;
pub use theme::{NoteTheme, ThemeMode};

/// Application name used for window titles and platform directories.
pub const APP_NAME: &str = "Notepad";
