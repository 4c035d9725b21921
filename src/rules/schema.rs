//! Structural problems recorded while reading a catalog.
//!
//! The parser keeps going past a message with two `<source>` elements or
//! no `<translation>`; this rule turns those notes into issues.

use crate::{
    core::{CheckContext, TsFile},
    issues::SchemaIssue,
};

pub fn check_schema_issues(ctx: &CheckContext) -> Vec<SchemaIssue> {
    ctx.ts_files().iter().flat_map(check_schema).collect()
}

pub fn check_schema(file: &TsFile) -> Vec<SchemaIssue> {
    file.violations
        .iter()
        .map(|violation| SchemaIssue {
            violation: violation.clone(),
        })
        .collect()
}
