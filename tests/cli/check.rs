use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const PLACEHOLDER_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ja">
<context>
    <name>TaskHoleParameters</name>
    <message>
        <source>Depth %1 mm</source>
        <translation>深さ mm</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_part_design_has_only_warnings() -> Result<()> {
    let test = CliTest::with_part_design()?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("✘ 64 problems (0 errors, 64 warnings)"));
    assert_eq!(out.matches("  unfinished\n").count(), 29);
    assert_eq!(out.matches("  untranslated\n").count(), 35);
    assert!(out.contains("translations/PartDesign_ja.ts:"));

    Ok(())
}

#[test]
fn test_selected_rule_only() -> Result<()> {
    let test = CliTest::with_part_design()?;

    let output = test.check_command().arg("unfinished").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("warning: \"Drill angle\"  unfinished"));
    assert!(out.contains("✘ 29 problems (0 errors, 29 warnings)"));
    assert!(!out.contains("untranslated"));

    Ok(())
}

#[test]
fn test_placeholder_mismatch_fails() -> Result<()> {
    let test = CliTest::with_file("hole_ja.ts", PLACEHOLDER_CATALOG)?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: \"Depth %1 mm\"  placeholder-mismatch"));
    assert!(out.contains("  --> ./hole_ja.ts:6:5") || out.contains("hole_ja.ts:6:5"));
    assert!(out.contains("= note: missing %1"));

    Ok(())
}

#[test]
fn test_ignore_contexts_from_config() -> Result<()> {
    let test = CliTest::with_file("hole_ja.ts", PLACEHOLDER_CATALOG)?;
    test.write_file(
        ".tsglotrc.json",
        r#"{ "ignoreContexts": ["TaskHoleParameters"] }"#,
    )?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("✓ Checked 1 catalog, 1 message - no issues found"));

    Ok(())
}

#[test]
fn test_typescript_sources_are_skipped() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "export const answer: number = 42;\n")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Checked 0 catalogs, 0 messages - no issues found"));

    Ok(())
}

#[test]
fn test_malformed_catalog_is_reported() -> Result<()> {
    let test = CliTest::with_file(
        "broken_ja.ts",
        "<?xml version=\"1.0\"?>\n<TS version=\"2.1\" language=\"ja\">\n<context>\n</TS>\n",
    )?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("parse-error"));
    assert!(out.contains("broken_ja.ts"));

    Ok(())
}

#[test]
fn test_missing_translations_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tsglotrc.json", r#"{ "translationsRoot": "./i18n" }"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Translations directory not found: ./i18n
    ");

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tsglotrc.json", "{ not json")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(crate::stderr(&output).starts_with("Error:"));

    Ok(())
}
