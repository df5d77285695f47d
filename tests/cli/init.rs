use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

const CONFIG_FILE: &str = ".textusagerc.json";

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "definitionsFile",
        "sourceRoot",
        "sourceExtension",
        "referenceLocale",
        "lookupFunction",
        "paramLookupFunction",
        "output",
        "localeNames",
    ] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["referenceLocale"], "ar");
    assert_eq!(parsed["localeNames"]["en"], "English");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .textusagerc.json"));
    assert!(test.root().join(CONFIG_FILE).exists());

    let content = test.read_file(CONFIG_FILE)?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(CONFIG_FILE, "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains(".textusagerc.json already exists"));
    assert_eq!(test.read_file(CONFIG_FILE)?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_loadable() -> Result<()> {
    let test = CliTest::new()?;

    let mut init = test.command();
    init.arg("init");
    assert_eq!(run(init)?.code, Some(0));

    test.write_file(
        crate::PROVIDER_PATH,
        "{ 'ar': { 'hello': 'مرحبا' }, 'en': { 'hello': 'Hello' } }",
    )?;
    test.write_file("lib/main.dart", "getText('hello');")?;

    let output = run(test.analyze_command())?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(!output.stderr.contains("No .textusagerc.json found"));

    Ok(())
}
