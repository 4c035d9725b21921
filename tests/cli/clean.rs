use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ja">
<context>
    <name>CmdPartDesignPad</name>
    <message>
        <source>Pad</source>
        <translation>パッド</translation>
    </message>
    <message>
        <source>Pad a selected sketch</source>
        <translation type="vanished">選択したスケッチをパッド</translation>
    </message>
</context>
<context>
    <name>CmdPartDesignLegacy</name>
    <message>
        <source>Legacy groove</source>
        <translation type="obsolete">旧グルーブ</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_clean_dry_run_keeps_file() -> Result<()> {
    let test = CliTest::with_file("PartDesign_ja.ts", CATALOG)?;

    let output = test.clean_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("CmdPartDesignPad \"Pad a selected sketch\" (vanished)"));
    assert!(out.contains("CmdPartDesignLegacy \"Legacy groove\" (obsolete)"));
    assert!(out.contains("Would remove 2 message(s) in 1 file(s)."));
    assert!(out.contains("Run with --apply to remove them."));
    assert_eq!(test.read_file("PartDesign_ja.ts")?, CATALOG);

    Ok(())
}

#[test]
fn test_clean_apply_rewrites_file() -> Result<()> {
    let test = CliTest::with_file("PartDesign_ja.ts", CATALOG)?;

    let output = test.clean_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Removed 2 message(s) in 1 file(s)."));

    let written = test.read_file("PartDesign_ja.ts")?;
    assert!(written.contains("<translation>パッド</translation>"));
    assert!(!written.contains("Pad a selected sketch"));
    assert!(!written.contains("CmdPartDesignLegacy"));

    // Nothing left to remove.
    let again = test.clean_command().output()?;
    assert!(stdout(&again).contains("No obsolete messages found"));

    Ok(())
}

#[test]
fn test_clean_part_design_has_nothing_to_remove() -> Result<()> {
    let test = CliTest::with_part_design()?;

    let output = test.clean_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No obsolete messages found"));
    assert_eq!(
        test.read_file("translations/PartDesign_ja.ts")?,
        crate::PART_DESIGN_JA
    );

    Ok(())
}

#[test]
fn test_clean_apply_refuses_catalog_with_schema_errors() -> Result<()> {
    let broken = CATALOG.replace(
        "    <message>\n        <source>Pad</source>",
        "    <message>\n        <translation>ソースなし</translation>\n    </message>\n    <message>\n        <source>Pad</source>",
    );
    let test = CliTest::with_file("PartDesign_ja.ts", &broken)?;

    let output = test.clean_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("left unchanged because of schema errors"));
    assert_eq!(test.read_file("PartDesign_ja.ts")?, broken);

    Ok(())
}
