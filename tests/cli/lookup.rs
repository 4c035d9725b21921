use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_finished_translation() -> Result<()> {
    let test = CliTest::with_part_design()?;

    assert_cmd_snapshot!(test.lookup_command("Workbench", "&Sketch"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    スケッチ(&S)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_unfinished_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_part_design()?;

    let output = test
        .lookup_command("TaskHoleParameters", "Drill angle")
        .arg("-v")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Drill angle\n");
    assert!(stderr(&output).contains("no finished translation for"));

    Ok(())
}

#[test]
fn test_unknown_message_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_part_design()?;

    let output = test
        .lookup_command("NoSuchContext", "Make it so")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Make it so\n");

    Ok(())
}

#[test]
fn test_plural_forms() -> Result<()> {
    let test = CliTest::with_file(
        "files_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>FileList</name>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n Datei</numerusform>
            <numerusform>%n Dateien</numerusform>
        </translation>
    </message>
</context>
</TS>
"#,
    )?;

    let one = test.lookup_command("FileList", "%n file(s)").args(["-n", "1"]).output()?;
    let many = test.lookup_command("FileList", "%n file(s)").args(["-n", "5"]).output()?;

    assert_eq!(stdout(&one), "1 Datei\n");
    assert_eq!(stdout(&many), "5 Dateien\n");

    Ok(())
}

#[test]
fn test_unknown_language() -> Result<()> {
    let test = CliTest::with_part_design()?;

    let output = test
        .lookup_command("Workbench", "&Sketch")
        .args(["--language", "de"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No catalog for language 'de'"));

    Ok(())
}
