use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::paths;

/// Everything that determines a provider's answer for one call.
#[derive(Debug, Clone, Serialize)]
pub struct CacheKey<'a> {
    pub backend: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub text: &'a str,
}

impl CacheKey<'_> {
    /// Hex SHA-256 of the JSON form of the key.
    pub fn digest(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_default();
        hex::encode(Sha256::digest(json.as_bytes()))
    }
}

pub struct CacheManager {
    db_path: PathBuf,
}

impl CacheManager {
    /// Opens (or creates) the cache database under the XDG cache directory.
    pub fn new() -> Result<Self> {
        let cache_dir = paths::cache_dir()?;

        std::fs::create_dir_all(&cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", cache_dir.display())
        })?;

        Self::open(&cache_dir.join("translations.db"))
    }

    pub fn open(db_path: &Path) -> Result<Self> {
        let manager = Self {
            db_path: db_path.to_path_buf(),
        };
        manager.init_db()?;
        Ok(manager)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS translations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cache_key TEXT UNIQUE NOT NULL,
                backend TEXT NOT NULL,
                source_language TEXT NOT NULL,
                target_language TEXT NOT NULL,
                source_text TEXT NOT NULL,
                translated_text TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                accessed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create translations table")?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_cache_key ON translations(cache_key)",
            [],
        )
        .context("Failed to create index")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    pub fn get(&self, key: &CacheKey<'_>) -> Result<Option<String>> {
        let cache_key = key.digest();
        let conn = self.connect()?;

        let result: Option<String> = conn
            .query_row(
                "SELECT translated_text FROM translations WHERE cache_key = ?1",
                [&cache_key],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to read translation cache")?;

        if result.is_some() {
            conn.execute(
                "UPDATE translations SET accessed_at = CURRENT_TIMESTAMP WHERE cache_key = ?1",
                [&cache_key],
            )?;
        }

        Ok(result)
    }

    pub fn put(&self, key: &CacheKey<'_>, translated_text: &str) -> Result<()> {
        let cache_key = key.digest();
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO translations
             (cache_key, backend, source_language, target_language, source_text, translated_text)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            [
                cache_key.as_str(),
                key.backend,
                key.source,
                key.target,
                key.text,
                translated_text,
            ],
        )
        .context("Failed to insert translation into cache")?;

        Ok(())
    }
}
