//! Native dialogs: file pickers and message boxes.
//!
//! All of these block the UI thread until the user answers.

use notecore::guard::{confirmation_message, ConfirmLargeFile};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

fn with_filters(dialog: FileDialog) -> FileDialog {
    dialog
        .add_filter("Text Documents", &["txt"])
        .add_filter("All Files", &["*"])
}

/// `None` when the user cancels.
pub fn pick_open_path() -> Option<PathBuf> {
    with_filters(FileDialog::new().set_title("Open")).pick_file()
}

pub fn pick_save_path() -> Option<PathBuf> {
    with_filters(FileDialog::new().set_title("Save As"))
        .set_file_name("Untitled.txt")
        .save_file()
        .map(notecore::document::with_default_extension)
}

/// Returns false when no native dialog could be shown, so the caller can
/// report the error some other way.
pub fn show_error(title: &str, message: &str) -> bool {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
    acknowledged(&answer)
}

/// An OK-only dialog that was actually shown can only come back as `Ok`.
/// Backends report a dialog they failed to launch as `Cancel`.
fn acknowledged(answer: &MessageDialogResult) -> bool {
    matches!(answer, MessageDialogResult::Ok)
}

pub fn show_about() {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("About Notepad")
        .set_description(format!(
            "Notepad {}\nA minimal text editor built with egui.",
            env!("CARGO_PKG_VERSION")
        ))
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Yes/No prompt for large files.
pub struct LargeFilePrompt;

impl ConfirmLargeFile for LargeFilePrompt {
    fn confirm(&mut self, _path: &Path, size: u64) -> bool {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Large File")
            .set_description(confirmation_message(size))
            .set_buttons(MessageButtons::YesNo)
            .show();
        matches!(answer, MessageDialogResult::Yes)
    }
}
