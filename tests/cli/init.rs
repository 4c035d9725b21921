use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .tsglotrc.json"));

    let config: Value = serde_json::from_str(&test.read_file(".tsglotrc.json")?)?;
    assert_eq!(config["translationsRoot"], "./");
    assert_eq!(config["checkAccelerators"], true);
    assert!(test.root().join(".tsglotrc.json").is_file());

    Ok(())
}

#[test]
fn test_init_does_not_overwrite() -> Result<()> {
    let test = CliTest::with_file(".tsglotrc.json", "{}\n")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".tsglotrc.json already exists"));
    assert_eq!(test.read_file(".tsglotrc.json")?, "{}\n");

    Ok(())
}
