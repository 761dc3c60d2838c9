//! SQLite schema bootstrap
//!
//! One `records` table holds every envelope. `schema_version` tracks the
//! layout so later releases can evolve it in place.

use rusqlite::Connection;

use crate::error::BackendResult;

const SCHEMA_VERSION: i32 = 1;

pub fn ensure_schema(conn: &Connection) -> BackendResult<()> {
    let current = schema_version(conn)?;

    if current < 1 {
        create_v1(conn)?;
    }

    set_schema_version(conn, SCHEMA_VERSION)?;
    Ok(())
}

fn schema_version(conn: &Connection) -> BackendResult<i32> {
    let result: std::result::Result<i32, _> =
        conn.query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        });

    match result {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(rusqlite::Error::SqliteFailure(_, _)) => {
            // Table doesn't exist yet
            conn.execute(
                "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL)",
                [],
            )?;
            conn.execute("INSERT INTO schema_version (version) VALUES (0)", [])?;
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}

fn set_schema_version(conn: &Connection, version: i32) -> BackendResult<()> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
    Ok(())
}

fn create_v1(conn: &Connection) -> BackendResult<()> {
    tracing::info!("Creating storage schema v1");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
    )?;

    Ok(())
}
