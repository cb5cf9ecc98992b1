#![allow(clippy::unwrap_used)]
//! End-to-end notebook translation with an in-process provider.

use std::fs;
use std::path::Path;
use std::time::Duration;

use nbtl_cli::cli::commands::translate::{OutputOptions, translate_notebooks};
use nbtl_cli::notebook::{self, SaveMode, find_notebooks};
use nbtl_cli::translation::{MockMode, MockProvider, RetryPolicy};
use tempfile::TempDir;

const NOTEBOOK: &str = r##"{
  "cells": [
    {
      "cell_type": "markdown",
      "metadata": {},
      "source": [
        "# Loading data\n",
        "Read the [guide](https://example.com/guide) first.\n",
        "```python\n",
        "df = load()  # not translated\n",
        "```"
      ]
    },
    {
      "cell_type": "code",
      "execution_count": 1,
      "metadata": {},
      "outputs": [],
      "source": [
        "count = 10  # number of rows\n",
        "print(f\"Loaded {count} rows\")"
      ]
    }
  ],
  "metadata": {
    "kernelspec": {
      "name": "python3"
    }
  },
  "nbformat": 4,
  "nbformat_minor": 5
}
"##;

const NO_RETRY: RetryPolicy = RetryPolicy {
    retries: 1,
    delay: Duration::ZERO,
};

fn course() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("week2")).unwrap();
    for name in ["intro.ipynb", "setup.ipynb", "week2/a.ipynb", "week2/b.ipynb"] {
        fs::write(root.join(name), NOTEBOOK).unwrap();
    }
    temp_dir
}

fn outputs(root: &Path) -> usize {
    walk(root)
        .iter()
        .filter(|name| name.ends_with("_pt.ipynb"))
        .count()
}

fn walk(root: &Path) -> Vec<String> {
    let mut names = Vec::new();
    for entry in fs::read_dir(root).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            names.extend(walk(&path));
        } else {
            names.push(path.to_string_lossy().into_owned());
        }
    }
    names
}

fn new_files() -> OutputOptions<'static> {
    OutputOptions {
        target: "pt",
        mode: SaveMode::NewFile,
        print: false,
    }
}

#[tokio::test]
async fn test_recursive_directory_translates_every_notebook() {
    let temp_dir = course();
    let notebooks = find_notebooks(temp_dir.path(), true, "pt").unwrap();

    translate_notebooks(&notebooks, MockProvider::new(MockMode::Upper), NO_RETRY, &new_files())
        .await
        .unwrap();

    assert_eq!(outputs(temp_dir.path()), 4);
}

#[tokio::test]
async fn test_top_level_only_translates_two() {
    let temp_dir = course();
    let notebooks = find_notebooks(temp_dir.path(), false, "pt").unwrap();

    translate_notebooks(&notebooks, MockProvider::new(MockMode::Upper), NO_RETRY, &new_files())
        .await
        .unwrap();

    assert_eq!(outputs(temp_dir.path()), 2);
}

#[tokio::test]
async fn test_second_run_skips_earlier_outputs() {
    let temp_dir = course();

    let first = find_notebooks(temp_dir.path(), true, "pt").unwrap();
    translate_notebooks(&first, MockProvider::new(MockMode::Upper), NO_RETRY, &new_files())
        .await
        .unwrap();

    let second = find_notebooks(temp_dir.path(), true, "pt").unwrap();
    assert_eq!(second, first);

    translate_notebooks(&second, MockProvider::new(MockMode::Upper), NO_RETRY, &new_files())
        .await
        .unwrap();
    assert_eq!(outputs(temp_dir.path()), 4);
    assert!(!walk(temp_dir.path()).iter().any(|name| name.ends_with("_pt_pt.ipynb")));
}

#[tokio::test]
async fn test_another_target_still_sees_the_originals() {
    let temp_dir = course();

    let first = find_notebooks(temp_dir.path(), true, "pt").unwrap();
    translate_notebooks(&first, MockProvider::new(MockMode::Upper), NO_RETRY, &new_files())
        .await
        .unwrap();

    // translations into another language are ordinary notebooks for this target
    assert_eq!(find_notebooks(temp_dir.path(), true, "ja").unwrap().len(), 8);
}

#[tokio::test]
async fn test_translated_notebook_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lesson.ipynb");
    fs::write(&path, NOTEBOOK).unwrap();

    translate_notebooks(
        &[path.clone()],
        MockProvider::new(MockMode::Upper),
        NO_RETRY,
        &new_files(),
    )
    .await
    .unwrap();

    let translated = notebook::load(&temp_dir.path().join("lesson_pt.ipynb")).unwrap();
    assert_eq!(
        translated.cells[0].source,
        vec![
            "# LOADING DATA\n",
            "READ THE [guide](https://example.com/guide) FIRST.\n",
            "```python\n",
            "df = load()  # not translated\n",
            "```",
        ]
    );
    assert_eq!(
        translated.cells[1].source,
        vec!["count = 10  # NUMBER OF ROWS\n", "print(f\"LOADED {count} ROWS\")"]
    );
    assert_eq!(
        translated.field("metadata").unwrap()["kernelspec"]["name"],
        "python3"
    );
    assert_eq!(translated.cells[1].field("execution_count").unwrap(), 1);
}

#[tokio::test]
async fn test_identity_translation_reproduces_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lesson.ipynb");
    fs::write(&path, NOTEBOOK).unwrap();

    translate_notebooks(
        &[path],
        MockProvider::new(MockMode::Identity),
        NO_RETRY,
        &new_files(),
    )
    .await
    .unwrap();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("lesson_pt.ipynb")).unwrap(),
        NOTEBOOK
    );
}

#[tokio::test]
async fn test_rename_mode_keeps_a_backup() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lesson.ipynb");
    fs::write(&path, NOTEBOOK).unwrap();

    translate_notebooks(
        &[path.clone()],
        MockProvider::new(MockMode::Upper),
        NO_RETRY,
        &OutputOptions {
            target: "pt",
            mode: SaveMode::Rename,
            print: false,
        },
    )
    .await
    .unwrap();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("lesson_bk.ipynb")).unwrap(),
        NOTEBOOK
    );
    assert!(fs::read_to_string(&path).unwrap().contains("LOADING DATA"));
    assert!(!temp_dir.path().join("lesson_pt.ipynb").exists());
}

#[tokio::test]
async fn test_failed_translation_leaves_files_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lesson.ipynb");
    fs::write(&path, NOTEBOOK).unwrap();

    let result = translate_notebooks(
        &[path.clone()],
        MockProvider::new(MockMode::Fail),
        RetryPolicy {
            retries: 2,
            delay: Duration::ZERO,
        },
        &OutputOptions {
            target: "pt",
            mode: SaveMode::Rename,
            print: false,
        },
    )
    .await;

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to translate after 2 attempts"));
    assert_eq!(fs::read_to_string(&path).unwrap(), NOTEBOOK);
    assert!(!temp_dir.path().join("lesson_bk.ipynb").exists());
}
