//! Front-matter types and data structures.

/// Outcome of extracting front matter from one document.
///
/// Exactly one variant holds per document. Only `Success` carries a
/// summary, and that summary is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionStatus {
    /// Header block parsed and a non-empty summary found.
    Success { summary: String },
    /// Document does not start with a `---` line.
    MissingDelimiter,
    /// Opening `---` found but no closing `---` line.
    UnterminatedBlock,
    /// Header block has no `summary:` key.
    MissingSummaryKey,
    /// `summary:` present but blank after normalization.
    EmptySummary,
    /// The file could not be read.
    Unreadable(String),
}

impl ExtractionStatus {
    /// Stable kebab-case identifier for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::MissingDelimiter => "missing-delimiter",
            Self::UnterminatedBlock => "unterminated-block",
            Self::MissingSummaryKey => "missing-summary-key",
            Self::EmptySummary => "empty-summary",
            Self::Unreadable(_) => "unreadable",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Metadata derived from a document's header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub status: ExtractionStatus,
    /// Hints in declaration order, duplicates kept.
    pub read_when: Vec<String>,
}

impl FrontMatter {
    /// A result with no hints, used for failures found before the block is scanned.
    pub fn failed(status: ExtractionStatus) -> Self {
        Self { status, read_when: Vec::new() }
    }

    pub fn summary(&self) -> Option<&str> {
        match &self.status {
            ExtractionStatus::Success { summary } => Some(summary),
            _ => None,
        }
    }
}
