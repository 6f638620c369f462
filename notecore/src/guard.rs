//! Large file guard
//!
//! Opening goes through a size check first. Anything at or above
//! [`LARGE_FILE_THRESHOLD`] must be confirmed by the user before a single
//! byte of content is read, because the read that follows is synchronous
//! and will stall the UI thread.

use crate::document::Document;
use crate::error::{FileError, Result};
use std::io;
use std::path::Path;

/// 5 MiB. Files of exactly this size already need confirmation.
pub const LARGE_FILE_THRESHOLD: u64 = 5 * 1024 * 1024;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// What the size check decided for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Small enough to load straight away.
    Immediate { size: u64 },
    /// Large file: ask first.
    Confirm { size: u64 },
}

/// How a guarded open ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Loaded { size: u64 },
    /// The user said no. Not an error; the document is untouched.
    Declined,
}

/// The blocking Yes/No prompt shown for large files.
pub trait ConfirmLargeFile {
    /// Return `true` only on an explicit "yes". Dismissal counts as "no".
    fn confirm(&mut self, path: &Path, size: u64) -> bool;
}

impl<F> ConfirmLargeFile for F
where
    F: FnMut(&Path, u64) -> bool,
{
    fn confirm(&mut self, path: &Path, size: u64) -> bool {
        self(path, size)
    }
}

pub fn requires_confirmation(size: u64) -> bool {
    size >= LARGE_FILE_THRESHOLD
}

/// Stat `path` and decide whether it may be loaded without asking.
pub fn check(path: &Path) -> Result<Admission> {
    let meta = std::fs::metadata(path).map_err(|e| FileError::from_read(path, e))?;
    if meta.is_dir() {
        return Err(FileError::Read {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::Other, "is a directory"),
        });
    }
    let size = meta.len();
    if requires_confirmation(size) {
        Ok(Admission::Confirm { size })
    } else {
        Ok(Admission::Immediate { size })
    }
}

/// Size in MB with one decimal, e.g. `5.0` or `12.3`.
pub fn format_megabytes(size: u64) -> String {
    format!("{:.1}", size as f64 / BYTES_PER_MB)
}

pub fn confirmation_message(size: u64) -> String {
    format!(
        "This file is {} MB. Loading large files may impact performance. Do you want to continue?",
        format_megabytes(size)
    )
}

/// Open `path` into `doc`, asking `prompt` first when the file is large.
///
/// On `Declined` or on any error the document keeps its previous buffer
/// and path.
pub fn open_guarded(
    doc: &mut Document,
    path: &Path,
    prompt: &mut impl ConfirmLargeFile,
) -> Result<OpenOutcome> {
    let size = match check(path)? {
        Admission::Immediate { size } => size,
        Admission::Confirm { size } => {
            log::info!("{} is {} MB, asking before loading", path.display(), format_megabytes(size));
            if !prompt.confirm(path, size) {
                log::info!("large file load declined: {}", path.display());
                return Ok(OpenOutcome::Declined);
            }
            size
        }
    };

    doc.load(path)?;
    log::debug!("loaded {} ({} bytes)", path.display(), size);
    Ok(OpenOutcome::Loaded { size })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScratchDir;
    use std::path::PathBuf;

    fn never_asked(path: &Path, _size: u64) -> bool {
        panic!("prompt shown for {}", path.display());
    }

    fn populated_doc() -> Document {
        Document {
            text: "current buffer".to_string(),
            path: Some(PathBuf::from("/previous/file.txt")),
        }
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(!requires_confirmation(0));
        assert!(!requires_confirmation(LARGE_FILE_THRESHOLD - 1));
        assert!(requires_confirmation(LARGE_FILE_THRESHOLD));
        assert!(requires_confirmation(LARGE_FILE_THRESHOLD + 1));
    }

    #[test]
    fn test_check_boundary_files() {
        let dir = ScratchDir::new("check");
        let just_under = dir.sized_file("under.txt", LARGE_FILE_THRESHOLD - 1);
        let exact = dir.sized_file("exact.txt", LARGE_FILE_THRESHOLD);

        assert_eq!(
            check(&just_under).unwrap(),
            Admission::Immediate { size: LARGE_FILE_THRESHOLD - 1 }
        );
        assert_eq!(check(&exact).unwrap(), Admission::Confirm { size: LARGE_FILE_THRESHOLD });
    }

    #[test]
    fn test_small_file_loads_without_prompt() {
        let dir = ScratchDir::new("small");
        let path = dir.join("small.txt");
        std::fs::write(&path, "line one\nline two\n").unwrap();

        let mut doc = populated_doc();
        let outcome = open_guarded(&mut doc, &path, &mut never_asked).unwrap();

        assert_eq!(outcome, OpenOutcome::Loaded { size: 18 });
        assert_eq!(doc.text, "line one\nline two\n");
        assert_eq!(doc.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_just_under_threshold_skips_prompt() {
        let dir = ScratchDir::new("under");
        let path = dir.sized_file("under.txt", LARGE_FILE_THRESHOLD - 1);

        let mut doc = Document::new();
        open_guarded(&mut doc, &path, &mut never_asked).unwrap();
        assert_eq!(doc.text.len() as u64, LARGE_FILE_THRESHOLD - 1);
    }

    #[test]
    fn test_exact_threshold_prompts_and_decline_keeps_document() {
        let dir = ScratchDir::new("decline");
        let path = dir.sized_file("big.txt", LARGE_FILE_THRESHOLD);

        let mut asked = Vec::new();
        let mut prompt = |p: &Path, size: u64| {
            asked.push((p.to_path_buf(), size));
            false
        };

        let mut doc = populated_doc();
        let outcome = open_guarded(&mut doc, &path, &mut prompt).unwrap();

        assert_eq!(outcome, OpenOutcome::Declined);
        assert_eq!(asked, vec![(path.clone(), LARGE_FILE_THRESHOLD)]);
        assert_eq!(doc, populated_doc());
    }

    #[test]
    fn test_accepted_prompt_loads_file() {
        let dir = ScratchDir::new("accept");
        let path = dir.sized_file("big.txt", LARGE_FILE_THRESHOLD + 10);

        let mut doc = populated_doc();
        let outcome = open_guarded(&mut doc, &path, &mut |_: &Path, _: u64| true).unwrap();

        assert_eq!(outcome, OpenOutcome::Loaded { size: LARGE_FILE_THRESHOLD + 10 });
        assert_eq!(doc.text.len() as u64, LARGE_FILE_THRESHOLD + 10);
        assert_eq!(doc.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_prompt_runs_before_content_is_read() {
        let dir = ScratchDir::new("order");
        let path = dir.sized_file("big.txt", LARGE_FILE_THRESHOLD);

        // Rewrite the file while the prompt is up; the load must see the new content.
        let mut prompt = |p: &Path, _: u64| {
            std::fs::write(p, "rewritten while asking").unwrap();
            true
        };

        let mut doc = Document::new();
        open_guarded(&mut doc, &path, &mut prompt).unwrap();
        assert_eq!(doc.text, "rewritten while asking");
    }

    #[test]
    fn test_errors_leave_document_untouched() {
        let dir = ScratchDir::new("errors");
        let mut doc = populated_doc();

        let err = open_guarded(&mut doc, &dir.join("missing.txt"), &mut never_asked).unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));

        let err = open_guarded(&mut doc, &dir.join(""), &mut never_asked).unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));

        let latin1 = dir.join("latin1.txt");
        std::fs::write(&latin1, b"caf\xe9").unwrap();
        let err = open_guarded(&mut doc, &latin1, &mut never_asked).unwrap_err();
        assert!(matches!(err, FileError::Decode { .. }));

        assert_eq!(doc, populated_doc());
    }

    #[test]
    fn test_confirmation_message() {
        assert_eq!(format_megabytes(LARGE_FILE_THRESHOLD), "5.0");
        assert_eq!(format_megabytes(12 * 1024 * 1024 + 300 * 1024), "12.3");
        assert_eq!(
            confirmation_message(LARGE_FILE_THRESHOLD),
            "This file is 5.0 MB. Loading large files may impact performance. Do you want to continue?"
        );
    }
}
