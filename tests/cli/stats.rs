use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_part_design_stats() -> Result<()> {
    let test = CliTest::with_part_design()?;

    let output = test.stats_command().output()?;
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        lines[0].split_whitespace().collect::<Vec<_>>(),
        vec![
            "catalog",
            "language",
            "contexts",
            "messages",
            "finished",
            "unfinished",
            "obsolete",
            "done"
        ]
    );
    assert_eq!(
        lines[1].split_whitespace().collect::<Vec<_>>(),
        vec![
            "./translations/PartDesign_ja.ts",
            "ja",
            "110",
            "995",
            "966",
            "29",
            "0",
            "97.1%"
        ]
    );

    Ok(())
}

#[test]
fn test_no_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.stats_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "No translation catalogs found.\n");

    Ok(())
}
