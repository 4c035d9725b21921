//! Core catalog engine.
//!
//! ## Module Structure
//!
//! - `data`: In-memory model of TS documents
//! - `parsers`: TS XML reader
//! - `writer`: TS XML writer (lupdate layout)
//! - `catalog`: Runtime lookup with source fallback
//! - `numerus`: Plural form selection per language
//! - `placeholders`: Placeholder and accelerator extraction
//! - `file_scanner`: Discovery of `.ts` files
//! - `context`: Loaded project state shared by commands and rules

pub mod catalog;
pub mod context;
pub mod data;
pub mod file_scanner;
pub mod numerus;
pub mod parsers;
pub mod placeholders;
pub mod writer;

pub use catalog::Catalog;
pub use context::{CheckContext, LoadedCatalogs};
pub use data::*;
pub use numerus::NumerusRule;
