//! Docs directory discovery.
//!
//! This module walks a documents directory and yields the relative paths of
//! every markdown file that is not hidden behind a dot-directory or an
//! excluded directory name.

pub mod types;
pub mod walker;

pub use types::{DEFAULT_EXCLUSIONS, DocRef, ExclusionSet};
pub use walker::{DocsWalker, DocsWalkerError, walk_docs};
