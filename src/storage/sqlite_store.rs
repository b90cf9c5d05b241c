use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};

use super::PersistentStore;
use crate::error::{GeonotesError, Result};

pub const GEONOTES_DIR: &str = ".geonotes";
const NOTES_DB: &str = "notes.db";

/// Key-value store backed by a single SQLite table.
pub struct SqliteStore {
    conn: Connection,
    path: PathBuf,
}

impl SqliteStore {
    /// Initialize a new geonotes project under `root`
    pub fn init(root: &Path) -> Result<Self> {
        let dir = root.join(GEONOTES_DIR);

        if dir.exists() {
            return Err(GeonotesError::AlreadyInitialized);
        }

        fs::create_dir_all(&dir)?;
        Self::open_at(dir.join(NOTES_DB))
    }

    /// Open an existing geonotes project
    pub fn open(root: &Path) -> Result<Self> {
        let path = root.join(GEONOTES_DIR).join(NOTES_DB);

        if !path.exists() {
            return Err(GeonotesError::NotInitialized);
        }

        Self::open_at(path)
    }

    fn open_at(path: PathBuf) -> Result<Self> {
        let conn = Connection::open(&path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn, path })
    }

    /// The `.geonotes` directory holding the database
    pub fn project_dir(&self) -> Option<&Path> {
        self.path.parent()
    }
}

impl PersistentStore for SqliteStore {
    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            [key, value],
        )?;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}
