//! SQLite storage backend

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;

use crate::backend::StorageBackend;
use crate::error::BackendResult;
use crate::schema::ensure_schema;

/// Persistent backend over a single SQLite database. Clones share the
/// underlying connection.
pub struct SqliteBackend {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteBackend {
    pub fn open<P: AsRef<Path>>(path: P) -> BackendResult<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for better concurrent performance
        let _: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        ensure_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> BackendResult<Self> {
        let conn = Connection::open_in_memory()?;
        ensure_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

impl StorageBackend for SqliteBackend {
    fn get_item(&self, key: &str) -> BackendResult<Option<String>> {
        let conn = self.conn.lock();
        let value = conn
            .query_row("SELECT value FROM records WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> BackendResult<()> {
        let updated_at = Utc::now().to_rfc3339();
        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO records (key, value, updated_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![key, value, updated_at],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> BackendResult<()> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM records WHERE key = ?1", [key])?;
        Ok(())
    }

    fn clear(&self) -> BackendResult<()> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM records", [])?;
        Ok(())
    }
}

impl Clone for SqliteBackend {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}
