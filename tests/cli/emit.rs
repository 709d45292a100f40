use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, SCRIPT};

/// Parse the payload out of `module.exports = <payload>;`.
fn exported_payload(content: &str) -> Value {
    let payload = content
        .strip_prefix("module.exports = ")
        .and_then(|rest| rest.strip_suffix(';'))
        .expect("unexpected script shape");
    serde_json::from_str(payload).expect("payload should be JSON")
}

#[test]
fn test_emit_writes_language_variants() -> Result<()> {
    let test = CliTest::with_fries()?;

    let output = test.emit_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(
        test.list_dir("dist")?,
        vec![
            "a-script-file.en-US.js",
            "a-script-file.en.js",
            "a-script-file.js",
            "another-script-file.en-US.js",
            "another-script-file.en.js",
            "another-script-file.js",
            "index.html",
        ]
    );

    for stem in ["a-script-file", "another-script-file"] {
        assert_eq!(
            exported_payload(&test.read_file(&format!("dist/{stem}.js"))?),
            json!({"en": {"fries": "Chips"}, "en-US": {"fries": "French fries"}})
        );
        assert_eq!(
            exported_payload(&test.read_file(&format!("dist/{stem}.en.js"))?),
            json!({"en": {"fries": "Chips"}})
        );
        assert_eq!(
            exported_payload(&test.read_file(&format!("dist/{stem}.en-US.js"))?),
            json!({"en-US": {"fries": "French fries"}})
        );
    }
    assert_eq!(test.read_file("dist/index.html")?, "<html></html>");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Wrote 6 assets for 2 script assets"), "{stdout}");

    Ok(())
}

#[test]
fn test_emit_twice_is_idempotent() -> Result<()> {
    let test = CliTest::with_fries()?;

    let first = test.emit_command().output()?;
    assert!(first.status.success());
    let listing = test.list_dir("dist")?;
    let aggregate = test.read_file("dist/a-script-file.js")?;
    let english = test.read_file("dist/a-script-file.en.js")?;

    let second = test.emit_command().output()?;
    assert!(
        second.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&second.stderr)
    );

    assert_eq!(test.list_dir("dist")?, listing);
    assert_eq!(test.read_file("dist/a-script-file.js")?, aggregate);
    assert_eq!(test.read_file("dist/a-script-file.en.js")?, english);

    let stdout = String::from_utf8(second.stdout)?;
    assert!(stdout.contains("No script assets found"), "{stdout}");

    Ok(())
}

#[test]
fn test_emit_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_fries()?;

    let output = test.emit_command().arg("--dry-run").output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("dist/a-script-file.js")?, SCRIPT);
    assert!(!test.root().join("dist/a-script-file.en.js").exists());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("a-script-file.en-US.js"));
    assert!(stdout.contains("Would write 6 assets"));

    Ok(())
}

#[test]
fn test_emit_source_fallback_warns() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/messages.json", r#"{ "fries": "Fries" }"#)?;
    test.write_file("dist/app.js", SCRIPT)?;

    let output = test.emit_command().output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("dist/app.js")?,
        r#"module.exports = {"source":{"fries":"Fries"}};"#
    );
    assert_eq!(test.list_dir("dist")?, vec!["app.js"]);

    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("warning: No translation files found matching translations/messages.*.json"),
        "{stderr}"
    );

    Ok(())
}

#[test]
fn test_emit_strict_fails_without_translations() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/messages.json", r#"{ "fries": "Fries" }"#)?;
    test.write_file("dist/app.js", SCRIPT)?;

    let output = test.emit_command().arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(test.read_file("dist/app.js")?, SCRIPT);

    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("No translation files found matching translations/messages.*.json"),
        "{stderr}"
    );

    Ok(())
}

#[test]
fn test_emit_development_escapes_payload() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/messages.json", r#"{ "fries": "Fries" }"#)?;
    test.write_file(
        "dist/app.js",
        r#"eval("module.exports = '__TRANSLATIONS_MODULE_STRING_TO_BE_REPLACED__';");"#,
    )?;

    let output = test.emit_command().arg("--development").output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("dist/app.js")?,
        r#"eval("module.exports = {\"source\":{\"fries\":\"Fries\"}};");"#
    );

    Ok(())
}

#[test]
fn test_emit_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".transpackrc.json",
        r#"{
            "directory": "new-directory",
            "fileNameBase": "new-file-name-base",
            "assetsDir": "build",
            "payloadStyle": "tagged",
            "ignores": ["vendor/**"]
        }"#,
    )?;
    test.write_file("new-directory/new-file-name-base.json", r#"{ "fries": "Fries" }"#)?;
    test.write_file("new-directory/new-file-name-base.en.json", r#"{ "fries": "Chips" }"#)?;
    test.write_file("build/js/main.js", SCRIPT)?;
    test.write_file("build/vendor/lib.js", SCRIPT)?;

    let output = test.emit_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(
        test.read_file("build/js/main.en.js")?,
        r#"module.exports = {"language":"en","en":{"fries":"Chips"}};"#
    );
    assert_eq!(
        test.read_file("build/js/main.js")?,
        r#"module.exports = {"containsAllLanguages":true,"en":{"fries":"Chips"}};"#
    );
    assert_eq!(test.read_file("build/vendor/lib.js")?, SCRIPT);
    assert_eq!(test.list_dir("build/vendor")?, vec!["lib.js"]);

    Ok(())
}

#[test]
fn test_emit_invalid_translation_json() -> Result<()> {
    let test = CliTest::with_fries()?;
    test.write_file("translations/messages.de.json", "{ broken")?;

    let output = test.emit_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(test.list_dir("dist")?.len(), 3);

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to parse translation file"), "{stderr}");

    Ok(())
}

#[test]
fn test_emit_missing_assets_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/messages.en.json", "{}")?;

    let output = test.emit_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("does not exist"), "{stderr}");

    Ok(())
}
