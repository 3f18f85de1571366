//! Front-matter extraction from markdown documents.
//!
//! This module provides functionality to:
//! - Scan the `---` delimited header block of a document
//! - Pull out the `summary` and `read_when` keys with a restricted line grammar
//! - Classify the outcome as an [`ExtractionStatus`]
//!
//! Extraction never fails; every problem is encoded in the status.

pub mod extractor;
pub mod parser;
pub mod types;

pub use extractor::extract;
pub use parser::parse_front_matter;
pub use types::{ExtractionStatus, FrontMatter};
