//! Finding notebooks below a directory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::persist::is_generated;

const EXTENSION: &str = "ipynb";
const CHECKPOINTS: &str = ".ipynb_checkpoints";

/// Lists the notebooks under `root` to translate into `target`, sorted.
///
/// The whole list is collected before the caller writes anything, so
/// translated outputs created during the run are never picked up. Outputs
/// and backups left by earlier runs (`<stem>_<target>`, `<stem>_bk`) and
/// Jupyter's checkpoint directories are skipped.
pub fn find_notebooks(root: &Path, recursive: bool, target: &str) -> Result<Vec<PathBuf>> {
    let mut walker = WalkDir::new(root).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut notebooks = Vec::new();
    for entry in walker.into_iter().filter_entry(|e| !is_checkpoints(e)) {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if !entry.file_type().is_file() || !is_notebook(entry.path()) {
            continue;
        }
        if is_generated(entry.path(), target) {
            log::debug!("skipping earlier output {}", entry.path().display());
            continue;
        }
        notebooks.push(entry.into_path());
    }

    notebooks.sort();
    Ok(notebooks)
}

fn is_checkpoints(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == CHECKPOINTS
}

fn is_notebook(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == EXTENSION)
}
