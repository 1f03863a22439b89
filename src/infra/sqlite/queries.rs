use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::infra::sqlite::schema::open_connection;

pub fn read_entry(db_path: &Path, key: &str) -> Result<Option<String>> {
    let conn = open_connection(db_path)?;
    conn.query_row(
        "SELECT value FROM kv_entry WHERE key = ?1",
        [key],
        |row| row.get(0),
    )
    .optional()
    .with_context(|| format!("failed to read entry {key}"))
}

pub fn write_entry(db_path: &Path, key: &str, value: &str) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute(
        "INSERT INTO kv_entry(key, value)
         VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
        params![key, value],
    )
    .with_context(|| format!("failed to write entry {key}"))?;
    Ok(())
}

pub fn delete_all_entries(db_path: &Path) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute("DELETE FROM kv_entry", [])
        .context("failed to clear entries")?;
    Ok(())
}

pub fn read_note(db_path: &Path, row_key: &str) -> Result<Option<String>> {
    let conn = open_connection(db_path)?;
    conn.query_row(
        "SELECT note FROM annotation WHERE row_key = ?1",
        [row_key],
        |row| row.get(0),
    )
    .optional()
    .context("failed to read annotation")
}

pub fn upsert_note(db_path: &Path, row_key: &str, note: &str) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute(
        "INSERT INTO annotation(row_key, note)
         VALUES (?1, ?2)
         ON CONFLICT(row_key) DO UPDATE SET note = excluded.note",
        params![row_key, note],
    )
    .context("failed to upsert annotation")?;
    Ok(())
}

pub fn delete_all_notes(db_path: &Path) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute("DELETE FROM annotation", [])
        .context("failed to clear annotations")?;
    Ok(())
}
