//! Reading and writing notebook files.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::model::Notebook;
use crate::fs::atomic_write;

/// Where a translated notebook goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// `<stem>_<target>.<ext>` next to the original.
    NewFile,
    /// Original moved to `<stem>_bk.<ext>`, translation written in its place.
    Rename,
}

pub fn load(path: &Path) -> Result<Notebook> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read notebook: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse notebook: {}", path.display()))
}

/// Pretty JSON with two-space indentation and a trailing newline.
pub fn to_json(notebook: &Notebook) -> Result<String> {
    let mut json = serde_json::to_string_pretty(notebook).context("Failed to serialize notebook")?;
    json.push('\n');
    Ok(json)
}

/// `lesson.ipynb` with target `pt` becomes `lesson_pt.ipynb`.
pub fn output_path(path: &Path, target: &str) -> PathBuf {
    with_stem_suffix(path, target)
}

/// `lesson.ipynb` becomes `lesson_bk.ipynb`.
pub fn backup_path(path: &Path) -> PathBuf {
    with_stem_suffix(path, "bk")
}

/// Whether `path` is named like a translation into `target` or a backup
/// written by an earlier run.
pub fn is_generated(path: &Path, target: &str) -> bool {
    let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
        return false;
    };
    [target, "bk"]
        .iter()
        .any(|suffix| stem.strip_suffix(suffix).is_some_and(|rest| rest.ends_with('_')))
}

fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.file_stem().unwrap_or_default());
    name.push("_");
    name.push(suffix);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// Writes the translated `notebook` for the original at `path` and returns
/// the path written.
///
/// In [`SaveMode::Rename`] the original is moved aside first; if the write
/// then fails the backup stays where it is.
pub fn save(notebook: &Notebook, path: &Path, target: &str, mode: SaveMode) -> Result<PathBuf> {
    let json = to_json(notebook)?;

    let destination = match mode {
        SaveMode::NewFile => output_path(path, target),
        SaveMode::Rename => {
            let backup = backup_path(path);
            fs::rename(path, &backup).with_context(|| {
                format!("Failed to rename {} to {}", path.display(), backup.display())
            })?;
            log::debug!("original kept as {}", backup.display());
            path.to_path_buf()
        }
    };

    atomic_write(&destination, &json)?;
    Ok(destination)
}
