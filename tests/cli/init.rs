use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("listsRoot").is_some(),
        "Config should have 'listsRoot' field"
    );
    assert!(
        parsed.get("outputRoot").is_some(),
        "Config should have 'outputRoot' field"
    );
    assert!(
        parsed.get("ignores").is_some(),
        "Config should have 'ignores' field"
    );

    // 2-space indentation from the pretty printer
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        String::from_utf8_lossy(&output.stdout).contains("Created .censorrc.json")
    );

    assert!(test.root().join(".censorrc.json").exists());

    let content = test.read_file(".censorrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".censorrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_list_file("romfs/5/0.txt", &["foo"])?;

    let output = test.compile_command().output()?;
    assert!(
        output.status.success(),
        "Compile should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("output/badwords.json").exists());

    Ok(())
}
