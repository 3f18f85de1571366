//! Recursive docs directory walker.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

use super::types::{DocRef, ExclusionSet};

#[derive(Debug, Error)]
pub enum DocsWalkerError {
    #[error("docs directory does not exist: {0}")]
    MissingRoot(String),

    #[error("docs path is not a directory: {0}")]
    NotADirectory(String),

    #[error("failed to read docs directory {0}: {1}")]
    RootError(String, #[source] std::io::Error),

    #[error("failed to walk docs directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Walker for discovering markdown documents under a docs root.
#[derive(Debug)]
pub struct DocsWalker {
    root: PathBuf,
    exclusions: ExclusionSet,
}

impl DocsWalker {
    /// Create a walker for `root` that skips directories named in `exclusions`.
    pub fn new(root: &Path, exclusions: ExclusionSet) -> Result<Self, DocsWalkerError> {
        let metadata = root.metadata().map_err(|e| match e.kind() {
            ErrorKind::NotFound => DocsWalkerError::MissingRoot(root.display().to_string()),
            _ => DocsWalkerError::RootError(root.display().to_string(), e),
        })?;

        if !metadata.is_dir() {
            return Err(DocsWalkerError::NotADirectory(root.display().to_string()));
        }

        Ok(Self { root: root.to_path_buf(), exclusions })
    }

    /// Walk the docs root and return every markdown document, sorted by
    /// relative path.
    pub fn walk(&self) -> Result<Vec<DocRef>, DocsWalkerError> {
        let mut docs = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry.map_err(|e| {
                DocsWalkerError::WalkError(self.root.display().to_string(), e)
            })?;

            if !entry.file_type().is_file() || !is_markdown_file(entry.path()) {
                continue;
            }

            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            docs.push(DocRef::from_relative(relative));
        }

        docs.sort();
        debug!(root = %self.root.display(), count = docs.len(), "walked docs directory");
        Ok(docs)
    }

    /// Check if a directory entry should be pruned from the walk.
    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        let name = entry.file_name().to_string_lossy();

        if name.starts_with('.') {
            debug!(path = %entry.path().display(), "skipping hidden directory");
            return true;
        }

        if self.exclusions.contains(&name) {
            debug!(path = %entry.path().display(), "skipping excluded directory");
            return true;
        }

        false
    }
}

/// Walk `root` with the given exclusions in one call.
pub fn walk_docs(
    root: &Path,
    exclusions: &ExclusionSet,
) -> Result<Vec<DocRef>, DocsWalkerError> {
    DocsWalker::new(root, exclusions.clone())?.walk()
}

// Matches on the raw name so `.md` itself and non-UTF-8 names count.
fn is_markdown_file(path: &Path) -> bool {
    path.file_name().is_some_and(|n| n.as_encoded_bytes().ends_with(b".md"))
}
