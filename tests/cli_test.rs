// Command-line tests for the docmark binary

use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_docmark")))
}

fn sources() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.py"), "def foo(): \"\"\"Does foo.\"\"\"\n").unwrap();
    fs::write(dir.path().join("b.py"), "class Bar: pass\n").unwrap();
    dir
}

const SCENARIO: &str =
    "# Documentation for a.py\n\n## foo\n\nDoes foo.\n\n# Documentation for b.py\n\n";

#[test]
fn interactive_prompts() {
    let src = sources();
    let out = TempDir::new().unwrap();
    let output = out.path().join("documentation.md");

    cmd()
        .current_dir(out.path())
        .write_stdin(format!("{}\n{}\n", src.path().display(), output.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter the directory containing Python files: ",
        ))
        .stdout(predicate::str::contains(
            "Enter the output Markdown file name (e.g., documentation.md): ",
        ))
        .stdout(predicate::str::contains(format!(
            "Documentation generated and saved to {}",
            output.display()
        )));

    assert_eq!(fs::read_to_string(&output).unwrap(), SCENARIO);
}

#[test]
fn arguments_skip_prompts() {
    let src = sources();
    let out = TempDir::new().unwrap();
    let output = out.path().join("docs.md");

    cmd()
        .current_dir(out.path())
        .arg(src.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the").not());

    assert_eq!(fs::read_to_string(&output).unwrap(), SCENARIO);
}

#[test]
fn missing_directory_fails() {
    let out = TempDir::new().unwrap();
    let output = out.path().join("docs.md");

    cmd()
        .current_dir(out.path())
        .arg(out.path().join("nope"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));

    assert!(!output.exists());
}

#[test]
fn syntax_error_fails_without_output() {
    let src = sources();
    fs::write(src.path().join("c.py"), "def broken(:\n").unwrap();
    let out = TempDir::new().unwrap();
    let output = out.path().join("docs.md");

    cmd()
        .current_dir(out.path())
        .arg(src.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Syntax error in"))
        .stderr(predicate::str::contains("c.py"));

    assert!(!output.exists());
}

#[test]
fn skip_invalid_continues() {
    let src = sources();
    fs::write(src.path().join("c.py"), "def broken(:\n").unwrap();
    let out = TempDir::new().unwrap();
    let output = out.path().join("docs.md");

    cmd()
        .current_dir(out.path())
        .arg(src.path())
        .arg("-o")
        .arg(&output)
        .arg("--skip-invalid")
        .assert()
        .success();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.starts_with(SCENARIO));
    assert!(report.contains("# Documentation for c.py\n\n> Skipped: "));
}

#[test]
fn config_file_in_working_directory() {
    let src = TempDir::new().unwrap();
    fs::write(src.path().join("stub.pyi"), "def typed():\n    \"\"\"Typed stub.\"\"\"\n").unwrap();
    fs::write(src.path().join("impl.py"), "def ignored():\n    \"\"\"Ignored.\"\"\"\n").unwrap();
    let out = TempDir::new().unwrap();
    fs::write(out.path().join("docmark.toml"), "[scan]\nextension = \".pyi\"\n").unwrap();
    let output = out.path().join("docs.md");

    cmd()
        .current_dir(out.path())
        .arg(src.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "# Documentation for stub.pyi\n\n## typed\n\nTyped stub.\n\n"
    );
}

#[test]
fn json_format() {
    let src = sources();
    let out = TempDir::new().unwrap();
    let output = out.path().join("docs.json");

    cmd()
        .current_dir(out.path())
        .arg(src.path())
        .arg("-o")
        .arg(&output)
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["files"]["a.py"]["foo"], "Does foo.");
    assert!(value["files"]["b.py"].as_object().unwrap().is_empty());
}

#[test]
fn invalid_config_fails() {
    let src = sources();
    let out = TempDir::new().unwrap();
    fs::write(out.path().join("docmark.toml"), "[scan]\nextension = \"\"\n").unwrap();

    cmd()
        .current_dir(out.path())
        .arg(src.path())
        .arg("-o")
        .arg(out.path().join("docs.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("extension must not be empty"));
}
