//! File parsers for translation catalogs.
//!
//! - `ts`: Qt Translation Source (`.ts`) XML reader

pub mod ts;
