//! Types shared by the docs walker and its callers.

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Directory names skipped when no exclusions are configured.
pub const DEFAULT_EXCLUSIONS: &[&str] = &["archive", "research"];

/// Path of a document relative to the docs root.
///
/// The display form always uses `/` as the separator so ordering and output
/// do not depend on the host platform. Ordering is plain byte-wise comparison
/// of that string. The on-disk relative path is kept as-is, so names that
/// are not valid UTF-8 still resolve to the real file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocRef {
    display: String,
    rel: PathBuf,
}

impl DocRef {
    /// Build a reference from a path relative to the docs root.
    pub fn from_relative(rel: &Path) -> Self {
        let display = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Self { display, rel: rel.to_path_buf() }
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Resolve this reference against the docs root.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.rel)
    }
}

impl fmt::Display for DocRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl Serialize for DocRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

impl From<&str> for DocRef {
    fn from(s: &str) -> Self {
        let rel = s.split('/').collect::<PathBuf>();
        Self { display: s.to_string(), rel }
    }
}

/// Directory names that are never descended into, at any depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// An exclusion set that skips nothing (hidden directories are still skipped).
    pub fn empty() -> Self {
        Self { names: BTreeSet::new() }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        DEFAULT_EXCLUSIONS.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { names: iter.into_iter().map(Into::into).collect() }
    }
}
