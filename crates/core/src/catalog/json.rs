//! JSON catalog output.

use serde::Serialize;

use super::builder::CatalogEntry;
use super::report::reason;
use crate::docs::DocRef;

/// Serialized form of one catalog entry.
#[derive(Debug, Serialize)]
pub struct EntryOutput<'a> {
    pub path: &'a DocRef,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<&'a str>,
    pub read_when: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl<'a> From<&'a CatalogEntry> for EntryOutput<'a> {
    fn from(entry: &'a CatalogEntry) -> Self {
        let fm = &entry.front_matter;
        Self {
            path: &entry.doc,
            status: fm.status.code(),
            summary: fm.summary(),
            read_when: &fm.read_when,
            reason: reason(&fm.status).map(|r| r.into_owned()),
        }
    }
}

/// Render the catalog as a pretty-printed JSON array.
pub fn render_json(entries: &[CatalogEntry]) -> Result<String, serde_json::Error> {
    let output: Vec<EntryOutput<'_>> = entries.iter().map(EntryOutput::from).collect();
    serde_json::to_string_pretty(&output)
}
