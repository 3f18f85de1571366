//! Catalog assembly and rendering.
//!
//! The builder walks the docs directory and extracts front matter from each
//! document; the renderers turn the resulting entries into a text report or
//! a JSON array.

pub mod builder;
pub mod json;
pub mod report;

pub use builder::{CatalogEntry, build_catalog};
pub use json::render_json;
pub use report::{render_text, write_text};
