//! Core data types for translation catalogs.
//!
//! This module defines the in-memory model of a Qt Translation Source file
//! and the positions used when reporting problems back to the user.
//!
//! ## Module Structure
//!
//! - `location`: Positions inside `.ts` files (CatalogLocation)
//! - `message`: Message-related types (Message, Translation, MessageKey)
//! - `ts_file`: Document-level types (TsFile, Context, SchemaViolation)

pub mod location;
pub mod message;
pub mod ts_file;

pub use location::{CatalogLocation, LineIndex};
pub use message::{
    Message, MessageContext, MessageKey, SourceReference, Translation, TranslationStatus,
};
pub use ts_file::{
    CatalogStats, Context, DEFAULT_INDENT, SchemaViolation, SchemaViolationKind, TsFile,
};
