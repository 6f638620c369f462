//! Document model for Notepad
//!
//! The buffer is a plain `String` so the egui text widget can edit it in
//! place. Loads and saves are whole-file and never leave the document
//! half-updated: on any error the buffer and path stay as they were.

use crate::error::{FileError, Result};
use crate::APP_NAME;
use std::path::{Path, PathBuf};

/// Extension given to save paths that were typed without one.
pub const DEFAULT_EXTENSION: &str = "txt";

/// The editor buffer and the file it came from (if any).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// Full text content
    pub text: String,
    /// File path if opened or saved
    pub path: Option<PathBuf>,
}

/// Result of a plain "save" request.
#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// The document has never been saved; ask the user for a path.
    NeedsPath,
}

/// A selection in char indices, `start <= end`. Empty means a bare caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Build from two cursor ends in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self { start: a.min(b), end: a.max(b) }
    }

    pub fn caret(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty buffer, no path, whatever came before.
    pub fn reset(&mut self) {
        self.text.clear();
        self.path = None;
    }

    /// Replace the buffer with the whole content of `path`.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path).map_err(|e| FileError::from_read(path, e))?;
        self.text = text;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Write the buffer to `path` and associate the document with it.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.text).map_err(|e| FileError::from_write(path, e))?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Write to the associated path, if there is one.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        match self.path.clone() {
            Some(path) => {
                self.save_to(&path)?;
                Ok(SaveOutcome::Saved(path))
            }
            None => Ok(SaveOutcome::NeedsPath),
        }
    }

    /// Window title: "Untitled - Notepad" or "<file name> - Notepad".
    pub fn title(&self) -> String {
        let name = self
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string());
        format!("{} - {}", name, APP_NAME)
    }

    pub fn selected_text(&self, sel: Selection) -> String {
        let (start, end) = self.byte_range(sel);
        self.text[start..end].to_string()
    }

    /// Remove the selection and return what was removed.
    pub fn cut(&mut self, sel: Selection) -> String {
        let (start, end) = self.byte_range(sel);
        self.text.drain(start..end).collect()
    }

    /// Replace the selection with `text`. Returns the caret position after it.
    pub fn paste(&mut self, sel: Selection, text: &str) -> usize {
        let (start, end) = self.byte_range(sel);
        self.text.replace_range(start..end, text);
        let caret = self.text[..start].chars().count();
        caret + text.chars().count()
    }

    fn byte_range(&self, sel: Selection) -> (usize, usize) {
        let start = byte_index(&self.text, sel.start);
        let end = byte_index(&self.text, sel.end.max(sel.start));
        (start, end)
    }
}

/// Byte offset of the `char_idx`-th char, clamped to the end of `text`.
fn byte_index(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Append `.txt` when a save path was typed without an extension.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}
