use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("Created .majboorirc.json"), "missing created line: {out}");

    let content = std::fs::read_to_string(test.root().join(".majboorirc.json"))?;
    let config: serde_json::Value = serde_json::from_str(&content)?;
    assert_eq!(config["ignoreTestFiles"], serde_json::json!(true));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".majboorirc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    let err = stderr(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(err.contains("already exists"), "missing error: {err}");

    Ok(())
}
