use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, SCRIPT};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("Created .transpackrc.json"));

    let content = test.read_file(".transpackrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["directory"], "translations");
    assert_eq!(parsed["fileNameBase"], "messages");
    assert_eq!(parsed["moduleName"], "translations");
    assert_eq!(parsed["development"], false);
    assert_eq!(parsed["strictMissingTranslations"], false);

    assert_eq!(test.read_file("translations/messages.json")?, "{}\n");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transpackrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("already exists"));
    assert_eq!(test.read_file(".transpackrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_keeps_existing_base_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/messages.json", r#"{"hello":"Hello"}"#)?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(
        test.read_file("translations/messages.json")?,
        r#"{"hello":"Hello"}"#
    );

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    test.write_file("translations/messages.json", "{}")?;
    test.write_file("translations/messages.de.json", r#"{"hello":"Hallo"}"#)?;
    test.write_file("dist/app.js", SCRIPT)?;

    let output = test.emit_command().output()?;
    assert!(
        output.status.success(),
        "Emit should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("dist/app.de.js").exists());

    Ok(())
}
