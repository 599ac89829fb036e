use anyhow::Result;

use crate::CliTest;

#[test]
fn test_optimize_removes_covered_patterns() -> Result<()> {
    let test = CliTest::new()?;
    test.write_list_file("romfs/19/1.txt", &["badword1", "bad.*"])?;

    let output = test.optimize_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let list = test.read_file("output/badwords_een.txt")?;
    assert_eq!(list, "bad.*");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("een: 2 -> 1 entries"),
        "stdout: {stdout}"
    );

    Ok(())
}

#[test]
fn test_optimize_merges_versions_per_language() -> Result<()> {
    let test = CliTest::new()?;
    test.write_list_file("romfs/5/1.txt", &["alpha"])?;
    test.write_list_file("romfs/10/1.txt", &["beta"])?;

    let output = test.optimize_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let list = test.read_file("output/badwords_een.txt")?;
    assert_eq!(list, "alpha\nbeta");

    Ok(())
}

#[test]
fn test_optimize_writes_one_file_per_language() -> Result<()> {
    let test = CliTest::new()?;
    test.write_list_file("romfs/19/0.txt", &["one"])?;
    test.write_list_file("romfs/19/common.txt", &["two"])?;

    let output = test.optimize_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(test.root().join("output/badwords_jja.txt").exists());
    assert!(test.root().join("output/badwords_common.txt").exists());
    assert!(!test.root().join("output/badwords_een.txt").exists());

    Ok(())
}

#[test]
fn test_optimize_language_filter() -> Result<()> {
    let test = CliTest::new()?;
    test.write_list_file("romfs/19/0.txt", &["one"])?;
    test.write_list_file("romfs/19/1.txt", &["two"])?;

    let output = test
        .optimize_command()
        .arg("--language")
        .arg("een")
        .output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(test.root().join("output/badwords_een.txt").exists());
    assert!(!test.root().join("output/badwords_jja.txt").exists());

    Ok(())
}

#[test]
fn test_optimize_unknown_language_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_list_file("romfs/19/0.txt", &["one"])?;

    let output = test
        .optimize_command()
        .arg("--language")
        .arg("xx")
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown language code"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_optimize_unsupported_pattern_kept_with_warning() -> Result<()> {
    let test = CliTest::new()?;
    test.write_list_file("romfs/19/1.txt", &["bad(", "clean"])?;

    let output = test.optimize_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning:"), "stderr: {stderr}");

    // The unparsable pattern survives verbatim.
    let list = test.read_file("output/badwords_een.txt")?;
    assert_eq!(list, "bad(\nclean");

    Ok(())
}

#[test]
fn test_optimize_verbose_lists_removals() -> Result<()> {
    let test = CliTest::new()?;
    test.write_list_file("romfs/19/1.txt", &["badword1", "bad.*"])?;

    let output = test.optimize_command().arg("--verbose").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("removed \"badword1\" (covered by \"bad.*\")"),
        "stdout: {stdout}"
    );

    Ok(())
}
