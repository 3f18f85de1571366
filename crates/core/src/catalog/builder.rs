//! Walk-then-extract pipeline.

use std::path::Path;

use tracing::debug;

use crate::docs::{DocRef, DocsWalkerError, ExclusionSet, walk_docs};
use crate::frontmatter::{FrontMatter, extract};

/// One cataloged document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub doc: DocRef,
    pub front_matter: FrontMatter,
}

/// Walk `root` and extract front matter from every document found.
///
/// Entries come back in walk order. A walker error aborts the whole build;
/// per-document problems are carried in each entry's status.
pub fn build_catalog(
    root: &Path,
    exclusions: &ExclusionSet,
) -> Result<Vec<CatalogEntry>, DocsWalkerError> {
    let docs = walk_docs(root, exclusions)?;

    let entries: Vec<CatalogEntry> = docs
        .into_iter()
        .map(|doc| {
            let front_matter = extract(&doc.resolve(root));
            CatalogEntry { doc, front_matter }
        })
        .collect();

    let ok = entries.iter().filter(|e| e.front_matter.status.is_success()).count();
    debug!(total = entries.len(), ok, "built docs catalog");
    Ok(entries)
}
