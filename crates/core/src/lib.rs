//! Core library for doclist.
//!
//! Walks a docs directory, extracts the `summary` and `read_when` front-matter
//! keys from each markdown document, and renders the result as a catalog.

#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod docs;
pub mod frontmatter;
