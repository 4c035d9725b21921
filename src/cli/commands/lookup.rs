use anyhow::Result;

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary};

use crate::core::{CheckContext, MessageKey};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let key = MessageKey::new(cmd.context, cmd.source, cmd.comment);
    let summary = resolve(&ctx, key, cmd.count, cmd.language.as_deref())?;

    Ok(CommandResult::quiet(CommandSummary::Lookup(summary)))
}

/// Translate `key` with the runtime fallback policy.
///
/// With `count` the plural form for that number is chosen and `%n` is
/// substituted.
pub fn resolve(
    ctx: &CheckContext,
    key: MessageKey,
    count: Option<u64>,
    language: Option<&str>,
) -> Result<LookupSummary> {
    let catalog = ctx.catalog_for(language)?;

    let (translation, fallback) = match count {
        Some(n) => (
            catalog.translate_n(&key.context, &key.source, &key.comment, n),
            catalog
                .text_n(&key.context, &key.source, &key.comment, n)
                .is_none(),
        ),
        None => {
            let text = catalog.translate_with_comment(&key.context, &key.source, &key.comment);
            let fallback = catalog
                .find(&key.context, &key.source, &key.comment)
                .and_then(|m| m.translation.effective_text())
                .is_none();
            (text.to_string(), fallback)
        }
    };

    let status = catalog
        .find(&key.context, &key.source, &key.comment)
        .map(|m| m.translation.status);
    Ok(LookupSummary {
        status,
        fallback,
        language: catalog.language().map(str::to_string),
        key,
        translation,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::cli::args::CommonArgs;
    use crate::core::TranslationStatus;

    fn fixture_ctx(dir: &std::path::Path) -> CheckContext {
        fs::create_dir(dir.join(".git")).unwrap();
        fs::write(
            dir.join("PartDesign_ja.ts"),
            include_str!("../../../tests/fixtures/PartDesign_ja.ts"),
        )
        .unwrap();
        CheckContext::new(&CommonArgs {
            path: dir.to_path_buf(),
            translations_root: None,
            verbose: false,
        })
        .unwrap()
    }

    #[test]
    fn test_resolve_finished_translation() {
        let dir = tempdir().unwrap();
        let ctx = fixture_ctx(dir.path());

        let summary = resolve(&ctx, MessageKey::new("Workbench", "&Sketch", ""), None, None).unwrap();
        assert_eq!(summary.translation, "スケッチ(&S)");
        assert_eq!(summary.status, Some(TranslationStatus::Finished));
        assert_eq!(summary.language.as_deref(), Some("ja"));
        assert!(!summary.fallback);
    }

    #[test]
    fn test_resolve_falls_back_to_source() {
        let dir = tempdir().unwrap();
        let ctx = fixture_ctx(dir.path());

        let unfinished =
            resolve(&ctx, MessageKey::new("TaskHoleParameters", "Drill angle", ""), None, None)
                .unwrap();
        assert_eq!(unfinished.translation, "Drill angle");
        assert_eq!(unfinished.status, Some(TranslationStatus::Unfinished));
        assert!(unfinished.fallback);

        let unknown = resolve(&ctx, MessageKey::new("Nowhere", "Nothing", ""), None, None).unwrap();
        assert_eq!(unknown.translation, "Nothing");
        assert_eq!(unknown.status, None);
        assert!(unknown.fallback);
    }

    #[test]
    fn test_resolve_count_with_empty_plural_form() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(
            dir.path().join("app_de.ts"),
            r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>Main</name>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n Datei</numerusform>
            <numerusform></numerusform>
        </translation>
    </message>
</context>
</TS>
"#,
        )
        .unwrap();
        let ctx = CheckContext::new(&CommonArgs {
            path: dir.path().to_path_buf(),
            translations_root: None,
            verbose: false,
        })
        .unwrap();

        let one = resolve(&ctx, MessageKey::new("Main", "%n file(s)", ""), Some(1), None).unwrap();
        assert_eq!(one.translation, "1 Datei");
        assert!(!one.fallback);

        let many = resolve(&ctx, MessageKey::new("Main", "%n file(s)", ""), Some(3), None).unwrap();
        assert_eq!(many.translation, "3 file(s)");
        assert_eq!(many.status, Some(TranslationStatus::Finished));
        assert!(many.fallback);
    }

    #[test]
    fn test_resolve_unknown_language() {
        let dir = tempdir().unwrap();
        let ctx = fixture_ctx(dir.path());

        let err = resolve(&ctx, MessageKey::new("Workbench", "&Sketch", ""), None, Some("de"))
            .unwrap_err();
        assert!(err.to_string().contains("No catalog for language 'de'"));
    }
}
