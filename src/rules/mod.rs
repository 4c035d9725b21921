//! Catalog checks.
//!
//! Each rule module exposes a pure `check_*` function over one parsed
//! [`TsFile`](crate::core::TsFile) and a `check_*_issues` wrapper that runs
//! it over every catalog of a [`CheckContext`].
//!
//! ## Module Structure
//!
//! - `helpers`: Message filters shared by the content rules
//! - `schema`: Structural problems noted by the parser
//! - `duplicate`: Repeated `(context, source, comment)` keys
//! - `placeholder`: Placeholders dropped or added in translation
//! - `unfinished`: Messages still marked unfinished
//! - `empty`: Finished translations without text
//! - `untranslated`: Finished translations identical to the source
//! - `accelerator`: Keyboard accelerators present on one side only
//! - `obsolete`: Obsolete and vanished entries

pub mod accelerator;
pub mod duplicate;
pub mod empty;
pub mod helpers;
pub mod obsolete;
pub mod placeholder;
pub mod schema;
pub mod unfinished;
pub mod untranslated;

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    core::CheckContext,
    issues::{Issue, Rule},
};

/// A rule that can be selected on the command line or through MCP.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum CheckRule {
    ParseError,
    Schema,
    DuplicateMessage,
    PlaceholderMismatch,
    Unfinished,
    EmptyTranslation,
    Untranslated,
    AcceleratorMismatch,
    Obsolete,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::ParseError,
            CheckRule::Schema,
            CheckRule::DuplicateMessage,
            CheckRule::PlaceholderMismatch,
            CheckRule::Unfinished,
            CheckRule::EmptyTranslation,
            CheckRule::Untranslated,
            CheckRule::AcceleratorMismatch,
            CheckRule::Obsolete,
        ]
    }

    /// Rule id reported on issues produced by this check.
    pub fn rule(&self) -> Rule {
        match self {
            CheckRule::ParseError => Rule::ParseError,
            CheckRule::Schema => Rule::Schema,
            CheckRule::DuplicateMessage => Rule::DuplicateMessage,
            CheckRule::PlaceholderMismatch => Rule::PlaceholderMismatch,
            CheckRule::Unfinished => Rule::Unfinished,
            CheckRule::EmptyTranslation => Rule::EmptyTranslation,
            CheckRule::Untranslated => Rule::Untranslated,
            CheckRule::AcceleratorMismatch => Rule::AcceleratorMismatch,
            CheckRule::Obsolete => Rule::Obsolete,
        }
    }
}

/// Run the selected rules (all when `rules` is empty) and return every
/// issue, sorted by location.
pub fn run_checks(ctx: &CheckContext, rules: &[CheckRule]) -> Vec<Issue> {
    let rules = if rules.is_empty() {
        CheckRule::all()
    } else {
        rules.to_vec()
    };

    let mut issues: Vec<Issue> = Vec::new();

    for rule in rules {
        match rule {
            CheckRule::ParseError => {
                issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));
            }
            CheckRule::Schema => {
                let found = schema::check_schema_issues(ctx);
                issues.extend(found.into_iter().map(Issue::Schema));
            }
            CheckRule::DuplicateMessage => {
                let found = duplicate::check_duplicate_issues(ctx);
                issues.extend(found.into_iter().map(Issue::DuplicateMessage));
            }
            CheckRule::PlaceholderMismatch => {
                let found = placeholder::check_placeholder_issues(ctx);
                issues.extend(found.into_iter().map(Issue::PlaceholderMismatch));
            }
            CheckRule::Unfinished => {
                let found = unfinished::check_unfinished_issues(ctx);
                issues.extend(found.into_iter().map(Issue::Unfinished));
            }
            CheckRule::EmptyTranslation => {
                let found = empty::check_empty_issues(ctx);
                issues.extend(found.into_iter().map(Issue::EmptyTranslation));
            }
            CheckRule::Untranslated => {
                let found = untranslated::check_untranslated_issues(ctx);
                issues.extend(found.into_iter().map(Issue::Untranslated));
            }
            CheckRule::AcceleratorMismatch => {
                let found = accelerator::check_accelerator_issues(ctx);
                issues.extend(found.into_iter().map(Issue::AcceleratorMismatch));
            }
            CheckRule::Obsolete => {
                let found = obsolete::check_obsolete_issues(ctx);
                issues.extend(found.into_iter().map(Issue::Obsolete));
            }
        }
    }

    issues.sort();
    issues.dedup();
    issues
}
