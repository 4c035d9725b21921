//! tsglot - checker and lookup tool for Qt translation catalogs
//!
//! tsglot reads Qt Linguist translation source files (`.ts`), answers
//! `(context, source)` lookups with the same fallback Qt applies at
//! runtime, and checks catalogs for problems such as lost placeholders,
//! unfinished or untranslated messages and duplicate keys.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, TS reader/writer and lookup
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Catalog checks
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
