//! # nbtl - Jupyter notebook translation CLI
//!
//! `nbtl` translates the human-language text of Jupyter notebooks: markdown
//! cells, code comments and the literals of formatted `print` calls. Code,
//! fenced blocks, links, images and header markers are kept exactly as they
//! were.
//!
//! ## Quick Start
//!
//! ```bash
//! # Writes lesson_pt.ipynb next to the original
//! nbtl --target pt lesson.ipynb
//!
//! # Every notebook below a directory, with the MyMemory backend
//! nbtl --target ja --translator mymemory course/
//!
//! # Keep the original as lesson_bk.ipynb and translate in place
//! nbtl -s english -t french --rename lesson.ipynb
//! ```
//!
//! ## Configuration
//!
//! Defaults are read from `~/.config/nbtl/config.toml`:
//!
//! ```toml
//! [defaults]
//! source = "en"
//! target = "pt"
//! translator = "google"
//! delay = 10
//! retries = 3
//!
//! [mymemory]
//! email = "me@example.com"
//! ```

/// Translation cache management using `SQLite`.
pub mod cache;

/// Markdown and code cell translators and the placeholder protector.
pub mod cells;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Typed errors for configuration, providers and retries.
pub mod errors;

/// File system utilities.
pub mod fs;

/// Notebook model, loading, saving and discovery.
pub mod notebook;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Translation backends, chunking and retries.
pub mod translation;

/// Terminal UI components (progress bar, colors).
pub mod ui;

/// Cell-by-cell translation of a whole notebook.
pub mod walker;
