#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Every run gets its own config and cache directories, so no user settings
//! leak in and nothing reaches a translation backend.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
        }
    }

    #[allow(deprecated)]
    fn nbtl(&self) -> Command {
        let mut cmd = Command::cargo_bin("nbtl").unwrap();
        cmd.env("XDG_CONFIG_HOME", self.home.path().join("config"))
            .env("XDG_CACHE_HOME", self.home.path().join("cache"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    fn write_config(&self, contents: &str) {
        let dir = self.home.path().join("config/nbtl");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), contents).unwrap();
    }
}

#[test]
fn test_help_displays_usage() {
    Sandbox::new()
        .nbtl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Translate the text of Jupyter notebooks"))
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("--translator"))
        .stdout(predicate::str::contains("--no-recursive"));
}

#[test]
fn test_version_displays_version() {
    Sandbox::new()
        .nbtl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    Sandbox::new()
        .nbtl()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("auto"))
        .stdout(predicate::str::contains("pt"))
        .stdout(predicate::str::contains("zh-TW"));
}

#[test]
fn test_languages_list_for_mymemory_has_no_auto() {
    Sandbox::new()
        .nbtl()
        .args(["languages", "--translator", "mymemory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mymemory"))
        .stdout(predicate::str::contains("auto").not());
}

#[test]
fn test_config_shows_defaults_without_file() {
    Sandbox::new()
        .nbtl()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("not found"))
        .stdout(predicate::str::contains("google"))
        .stdout(predicate::str::contains("10s"));
}

#[test]
fn test_config_shows_file_values() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[defaults]\ntarget = \"ja\"\ntranslator = \"mymemory\"\n");

    sandbox
        .nbtl()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("ja"))
        .stdout(predicate::str::contains("mymemory"));
}

#[test]
fn test_broken_config_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[defaults\n");

    sandbox
        .nbtl()
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_missing_path_is_a_usage_error() {
    Sandbox::new()
        .nbtl()
        .args(["--target", "pt"])
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("Missing notebook path"));
}

#[test]
fn test_missing_target_is_a_usage_error() {
    let sandbox = Sandbox::new();
    let notebook = sandbox.home.path().join("lesson.ipynb");
    fs::write(&notebook, r#"{"cells": []}"#).unwrap();

    sandbox
        .nbtl()
        .arg(&notebook)
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("target"));

    assert!(!sandbox.home.path().join("lesson_pt.ipynb").exists());
}

#[test]
fn test_invalid_language_code_lists_available_codes() {
    let sandbox = Sandbox::new();
    let notebook = sandbox.home.path().join("lesson.ipynb");
    fs::write(&notebook, r#"{"cells": []}"#).unwrap();

    sandbox
        .nbtl()
        .args(["--target", "invalid_lang_xyz"])
        .arg(&notebook)
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("No support for the provided language"))
        .stderr(predicate::str::contains("zh-TW"));
}

#[test]
fn test_auto_source_is_rejected_by_mymemory() {
    let sandbox = Sandbox::new();
    let notebook = sandbox.home.path().join("lesson.ipynb");
    fs::write(&notebook, r#"{"cells": []}"#).unwrap();

    sandbox
        .nbtl()
        .args(["--source", "auto", "--target", "pt", "--translator", "mymemory"])
        .arg(&notebook)
        .assert()
        .code(exitcode::USAGE);
}

#[test]
fn test_nonexistent_notebook_is_an_io_error() {
    let sandbox = Sandbox::new();

    sandbox
        .nbtl()
        .args(["--target", "pt"])
        .arg(sandbox.home.path().join("missing.ipynb"))
        .assert()
        .code(exitcode::IOERR)
        .stderr(predicate::str::contains("Failed to read notebook"));
}

#[test]
fn test_invalid_notebook_json_is_a_data_error() {
    let sandbox = Sandbox::new();
    let notebook = sandbox.home.path().join("broken.ipynb");
    fs::write(&notebook, "{not json").unwrap();

    sandbox
        .nbtl()
        .args(["--target", "pt", "--no-cache"])
        .arg(&notebook)
        .assert()
        .code(exitcode::DATAERR);
}

#[test]
fn test_forced_directory_on_a_file() {
    let sandbox = Sandbox::new();
    let notebook = sandbox.home.path().join("lesson.ipynb");
    fs::write(&notebook, r#"{"cells": []}"#).unwrap();

    sandbox
        .nbtl()
        .args(["--target", "pt", "--directory"])
        .arg(&notebook)
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_directory_without_notebooks() {
    let sandbox = Sandbox::new();
    let dir = sandbox.home.path().join("empty");
    fs::create_dir_all(&dir).unwrap();

    sandbox
        .nbtl()
        .args(["--target", "pt"])
        .arg(&dir)
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("No notebooks"));
}

#[test]
fn test_notebook_without_text_needs_no_backend() {
    let sandbox = Sandbox::new();
    let notebook = sandbox.home.path().join("lesson.ipynb");
    fs::write(
        &notebook,
        r#"{"cells": [{"cell_type": "code", "metadata": {}, "source": ["x = 1\n", "y = x + 1"]}], "metadata": {}, "nbformat": 4, "nbformat_minor": 5}"#,
    )
    .unwrap();

    sandbox
        .nbtl()
        .args(["--target", "portuguese", "--quiet"])
        .arg(&notebook)
        .assert()
        .success();

    let written = fs::read_to_string(sandbox.home.path().join("lesson_pt.ipynb")).unwrap();
    assert!(written.contains("\"y = x + 1\""));
    assert!(written.ends_with("}\n"));
}
