use anyhow::Result;

use crate::CliTest;

#[test]
fn test_compile_writes_json_and_wiki() -> Result<()> {
    let test = CliTest::new()?;
    test.write_list_file("romfs/5/0.txt", &["foo"])?;
    test.write_list_file("romfs/10/0.txt", &["foo", "bar"])?;

    let output = test.compile_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = test.read_file("output/badwords.json")?;
    assert_eq!(json, r#"{"bar":{"jja":[10]},"foo":{"jja":[5,10]}}"#);

    let wiki = test.read_file("output/wiki.txt")?;
    assert_eq!(
        wiki,
        "|-\n| <nowiki>bar</nowiki> || || || jja || 10\n\
         |-\n| <nowiki>foo</nowiki> || || || jja || 5\u{2013}10\n"
    );

    Ok(())
}

#[test]
fn test_compile_reports_summary() -> Result<()> {
    let test = CliTest::new()?;
    test.write_list_file("romfs/19/common.txt", &["word"])?;

    let output = test.compile_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Compiled 1 word(s) from 1 file(s) across 1 version(s)."),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("badwords.json"));

    Ok(())
}

#[test]
fn test_compile_skips_stray_directories_with_warning() -> Result<()> {
    let test = CliTest::new()?;
    test.write_list_file("romfs/5/0.txt", &["foo"])?;
    test.write_file("romfs/notes/readme.txt", "not a list")?;

    let output = test.compile_command().output()?;
    // Completed, but flagged the skipped input.
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning:"), "stderr: {stderr}");

    // The artifact is still produced from the valid files.
    let json = test.read_file("output/badwords.json")?;
    assert_eq!(json, r#"{"foo":{"jja":[5]}}"#);

    Ok(())
}

#[test]
fn test_compile_fails_without_lists_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.compile_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_compile_uses_config_roots() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".censorrc.json",
        r#"{ "listsRoot": "./lists", "outputRoot": "./dist" }"#,
    )?;
    test.write_list_file("lists/5/common.txt", &["foo"])?;

    let output = test.compile_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = test.read_file("dist/badwords.json")?;
    assert_eq!(json, r#"{"foo":{"common":[5]}}"#);

    Ok(())
}

#[test]
fn test_compile_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".censorrc.json", r#"{ "listsRoot": "./missing" }"#)?;
    test.write_list_file("romfs/5/0.txt", &["foo"])?;

    let output = test
        .compile_command()
        .arg("--lists-root")
        .arg("./romfs")
        .output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("output/badwords.json").exists());

    Ok(())
}

#[test]
fn test_compile_respects_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".censorrc.json", r#"{ "ignores": ["**/common.txt"] }"#)?;
    test.write_list_file("romfs/5/0.txt", &["foo"])?;
    test.write_list_file("romfs/5/common.txt", &["ignored"])?;

    let output = test.compile_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = test.read_file("output/badwords.json")?;
    assert_eq!(json, r#"{"foo":{"jja":[5]}}"#);

    Ok(())
}
