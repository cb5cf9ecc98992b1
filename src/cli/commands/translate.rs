use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cache::{CacheManager, CachedProvider};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::errors::ConfigError;
use crate::notebook::{self, SaveMode, find_notebooks};
use crate::translation::{
    Backend, BackendClient, ResilientTranslator, RetryPolicy, TranslationProvider,
};
use crate::ui::{CellProgress, Style};
use crate::walker::translate_notebook;
use crate::{status, warn};

pub struct TranslateOptions {
    pub path: Option<PathBuf>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub delay: Option<u64>,
    pub retries: Option<u32>,
    pub translator: Option<Backend>,
    pub rename: bool,
    pub print: bool,
    pub directory: bool,
    pub recursive: bool,
    pub no_cache: bool,
}

/// What happens to each notebook once it is translated.
pub struct OutputOptions<'a> {
    /// Language code used in `<stem>_<target>.<ext>`.
    pub target: &'a str,
    pub mode: SaveMode,
    /// Echo translated cells to stdout.
    pub print: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let path = options.path.as_deref().ok_or(ConfigError::MissingPath)?;

    let config_file = ConfigManager::new()?.load_or_default()?;
    let resolved = resolve_config(
        &ResolveOptions {
            source: options.source.clone(),
            target: options.target.clone(),
            translator: options.translator,
            delay: options.delay,
            retries: options.retries,
        },
        &config_file,
    )?;

    let client = BackendClient::new(
        resolved.backend,
        &resolved.source,
        &resolved.target,
        &resolved.backend_options,
    )?;

    let target = client.target().to_string();
    let notebooks = collect_notebooks(path, &target, options.directory, options.recursive)?;
    if notebooks.len() > 1 {
        status!(
            "{} {} notebooks under {}",
            Style::header("Found"),
            Style::value(notebooks.len()),
            Style::path(path.display())
        );
    }

    let output = OutputOptions {
        target: &target,
        mode: if options.rename {
            SaveMode::Rename
        } else {
            SaveMode::NewFile
        },
        print: options.print,
    };

    if options.no_cache {
        return translate_notebooks(&notebooks, client, resolved.policy, &output).await;
    }

    match CacheManager::new() {
        Ok(cache) => {
            let backend = client.backend().name();
            let source = client.source().to_string();
            let cached = CachedProvider::new(client, cache, backend, &source, &target);
            translate_notebooks(&notebooks, cached, resolved.policy, &output).await
        }
        Err(e) => {
            warn!(
                "{} translation cache unavailable, continuing without it: {e:#}",
                Style::warning("Warning:")
            );
            translate_notebooks(&notebooks, client, resolved.policy, &output).await
        }
    }
}

/// A directory (or `--directory`) means every notebook below it; anything
/// else is a single notebook path.
fn collect_notebooks(
    path: &Path,
    target: &str,
    force_directory: bool,
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    if path.is_dir() {
        let notebooks = find_notebooks(path, recursive, target)?;
        if notebooks.is_empty() {
            return Err(ConfigError::NoNotebooks(path.to_path_buf()).into());
        }
        return Ok(notebooks);
    }

    if force_directory {
        return Err(ConfigError::NotADirectory(path.to_path_buf()).into());
    }

    Ok(vec![path.to_path_buf()])
}

/// Translates and saves `notebooks` one after the other.
///
/// Stops at the first failure; notebooks already written stay written and
/// the failing one writes nothing.
pub async fn translate_notebooks<P: TranslationProvider>(
    notebooks: &[PathBuf],
    provider: P,
    policy: RetryPolicy,
    output: &OutputOptions<'_>,
) -> Result<()> {
    let translator = ResilientTranslator::new(provider, policy);

    for path in notebooks {
        translate_file(path, &translator, output).await?;
    }

    Ok(())
}

async fn translate_file<P: TranslationProvider>(
    path: &Path,
    translator: &ResilientTranslator<P>,
    output: &OutputOptions<'_>,
) -> Result<PathBuf> {
    let mut notebook = notebook::load(path)?;

    let stats = notebook.stats();
    status!(
        "{} {} ({} cells: {} code, {} markdown)",
        Style::header("Translating"),
        Style::path(path.display()),
        Style::value(stats.total),
        Style::value(stats.code),
        Style::value(stats.markdown)
    );

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let progress = CellProgress::new(stats.total, &name);

    translate_notebook(&mut notebook, translator, |event| {
        if output.print && event.translated {
            progress.println(&event.cell.text());
        }
        progress.cell_done(event.index);
    })
    .await
    .with_context(|| format!("Failed to translate {}", path.display()))?;
    progress.finish();

    let written = notebook::save(&notebook, path, output.target, output.mode)?;
    status!("{} {}", Style::success("Wrote"), Style::path(written.display()));

    Ok(written)
}
