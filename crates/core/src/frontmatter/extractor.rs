//! Front-matter extraction from files on disk.

use std::fs;
use std::path::Path;

use tracing::{trace, warn};

use super::parser::parse_front_matter;
use super::types::{ExtractionStatus, FrontMatter};

/// Read the document at `path` and extract its front matter.
///
/// Never fails: an unreadable file becomes [`ExtractionStatus::Unreadable`].
/// Invalid UTF-8 is decoded lossily.
pub fn extract(path: &Path) -> FrontMatter {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read document");
            return FrontMatter::failed(ExtractionStatus::Unreadable(e.to_string()));
        }
    };

    let fm = parse_front_matter(&String::from_utf8_lossy(&bytes));
    trace!(
        path = %path.display(),
        status = fm.status.code(),
        hints = fm.read_when.len(),
        "extracted front matter"
    );
    fm
}
