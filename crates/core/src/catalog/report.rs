//! Plain-text catalog report.

use std::borrow::Cow;
use std::io::{self, Write};

use super::builder::CatalogEntry;
use crate::frontmatter::ExtractionStatus;

pub const HEADER: &str = "Listing all markdown files in docs folder:";
pub const EMPTY_NOTICE: &str = "No markdown files found in docs folder.";
pub const REMINDER: &str = concat!(
    "Reminder: keep docs up to date as behavior changes. ",
    "When your task matches any \"Read when\" hint above, read that doc before coding, ",
    "and suggest new coverage when it is missing.",
);

/// Short reason shown in brackets next to a document that failed extraction.
///
/// Returns `None` for successful extraction.
pub fn reason(status: &ExtractionStatus) -> Option<Cow<'static, str>> {
    match status {
        ExtractionStatus::Success { .. } => None,
        ExtractionStatus::MissingDelimiter => Some("missing front matter".into()),
        ExtractionStatus::UnterminatedBlock => Some("unterminated front matter".into()),
        ExtractionStatus::MissingSummaryKey => Some("summary key missing".into()),
        ExtractionStatus::EmptySummary => Some("summary is empty".into()),
        ExtractionStatus::Unreadable(msg) => Some(format!("unreadable: {msg}").into()),
    }
}

/// Render the catalog as a line-oriented report.
pub fn render_text(entries: &[CatalogEntry]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    if entries.is_empty() {
        out.push_str(EMPTY_NOTICE);
        out.push('\n');
    }

    for entry in entries {
        let fm = &entry.front_matter;
        match &fm.status {
            ExtractionStatus::Success { summary } => {
                out.push_str(&format!("{} - {}\n", entry.doc, summary));
                if !fm.read_when.is_empty() {
                    out.push_str(&format!("  Read when: {}\n", fm.read_when.join("; ")));
                }
            }
            ExtractionStatus::MissingDelimiter
            | ExtractionStatus::UnterminatedBlock
            | ExtractionStatus::MissingSummaryKey
            | ExtractionStatus::EmptySummary
            | ExtractionStatus::Unreadable(_) => {
                let why = reason(&fm.status).unwrap_or_default();
                out.push_str(&format!("{} - [{}]\n", entry.doc, why));
            }
        }
    }

    out.push('\n');
    out.push_str(REMINDER);
    out.push('\n');
    out
}

/// Write the text report to `writer`.
pub fn write_text<W: Write>(writer: &mut W, entries: &[CatalogEntry]) -> io::Result<()> {
    writer.write_all(render_text(entries).as_bytes())?;
    writer.flush()
}
