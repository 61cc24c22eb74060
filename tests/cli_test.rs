use anyhow::Result;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

const GROUPER: &str = env!("CARGO_BIN_EXE_anagram-grouper");
const TOML_GROUPER: &str = env!("CARGO_BIN_EXE_toml-grouper");
const DEMO: &str = env!("CARGO_BIN_EXE_demo");

#[test]
fn test_stdin_words_are_grouped_and_printed() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let mut child = Command::new(GROUPER)
        .args(["--stdin", "--print", "--output-path"])
        .arg(temp_dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"eat tea tan\nate nat bat\n")?;

    let output = child.wait_with_output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[..3], ["eat, tea, ate", "tan, nat", "bat"]);

    let written = std::fs::read_to_string(temp_dir.path().join("groups.txt"))?;
    assert_eq!(written, "eat, tea, ate\ntan, nat\nbat\n");

    Ok(())
}

#[test]
fn test_print_lists_one_group_per_line() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = Command::new(GROUPER)
        .args(["listen", "silent", "a", "a", "--print", "--output-path"])
        .arg(temp_dir.path())
        .stderr(Stdio::null())
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[..2], ["listen, silent", "a, a"]);
    assert!(lines[2].contains("groups.txt"));

    Ok(())
}

#[test]
fn test_bad_json_input_exits_with_input_code() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("words.json");
    std::fs::write(&input, r#"{"not": 1}"#)?;

    let output = Command::new(GROUPER)
        .arg("--input")
        .arg(&input)
        .arg("--output-path")
        .arg(temp_dir.path().join("out"))
        .stderr(Stdio::piped())
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("Could not read input"));

    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("out");
    let normalized_path = output_dir.to_str().unwrap().replace('\\', "/");

    let config_path = temp_dir.path().join("grouper.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
[job]
name = "dry-run"

[input]
words = ["eat", "tea"]

[output]
output_path = "{}"
formats = ["text", "json"]
print = true
"#,
            normalized_path
        ),
    )?;

    let output = Command::new(TOML_GROUPER)
        .arg("--config")
        .arg(&config_path)
        .arg("--dry-run")
        .stderr(Stdio::null())
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("DRY RUN MODE ENABLED"));
    assert!(!stdout.contains("eat, tea"));
    assert!(!output_dir.exists());

    Ok(())
}

#[test]
fn test_demo_prints_each_group_on_its_own_line() -> Result<()> {
    let output = Command::new(DEMO).output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], r#"Input: ["eat","tea","tan","ate","nat","bat"]"#);
    assert_eq!(
        lines[1..4],
        [r#"  ["eat","tea","ate"]"#, r#"  ["tan","nat"]"#, r#"  ["bat"]"#]
    );
    assert_eq!(lines[4..6], [r#"Input: [""]"#, r#"  [""]"#]);

    Ok(())
}
