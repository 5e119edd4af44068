use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["i18nFileSuffix"], ".properties");
    assert_eq!(parsed["i18nFuncName"], "t");
    assert_eq!(parsed["selectors"].as_array().map(Vec::len), Some(4));
    assert!(
        parsed.get("ignores").is_some(),
        "Config should have 'ignores' field"
    );

    // 2-space indentation
    assert!(content.contains("\n  \""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .finei18nrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".finei18nrc.json").exists());
    let content = test.read_file(".finei18nrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".finei18nrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .finei18nrc.json already exists
    ");

    assert_eq!(test.read_file(".finei18nrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    test.write_file("i18n/en.properties", "title=Title\n")?;
    test.write_file("src/app.tsx", r#"export const title = t("title");"#)?;

    let output = test.hints_command().arg("src/app.tsx").output()?;
    assert!(
        output.status.success(),
        "hints should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout(&output).contains("title → Title"));

    Ok(())
}

#[test]
fn test_init_with_source_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("web/.keep", "")?;

    let output = test
        .command()
        .args(["init", "--source-root", "web"])
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created web/.finei18nrc.json"));
    assert!(!test.root().join(".finei18nrc.json").exists());
    assert_config_content(&test.read_file("web/.finei18nrc.json")?)?;

    Ok(())
}
