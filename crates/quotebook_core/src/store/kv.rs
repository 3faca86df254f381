//! Key-value store contract and implementations.
//!
//! # Responsibility
//! - `SqliteKeyValueStore`: durable entries in the `kv_entries` table.
//! - `MemoryKeyValueStore`: session-scoped entries, dropped with the value.
//!
//! # Invariants
//! - `set` overwrites the previous value for the key entirely.
//! - `remove` on a missing key is a no-op.

use super::StoreResult;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;

/// Storage contract shared by durable and session stores.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// SQLite-backed durable store.
///
/// Expects a connection returned by `db::open_db*`, i.e. with migrations
/// applied.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// In-memory store. Backs session state and doubles as a test fake for the
/// durable store.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads a value without going through the `StoreResult` contract.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
    use crate::db::open_db_in_memory;

    #[test]
    fn sqlite_store_overwrites_and_removes() {
        let mut store = SqliteKeyValueStore::new(open_db_in_memory().unwrap());
        assert_eq!(store.get("quotes").unwrap(), None);

        store.set("quotes", "[]").unwrap();
        store.set("quotes", "[1]").unwrap();
        assert_eq!(store.get("quotes").unwrap().as_deref(), Some("[1]"));

        store.remove("quotes").unwrap();
        store.remove("quotes").unwrap();
        assert_eq!(store.get("quotes").unwrap(), None);
    }

    #[test]
    fn memory_store_is_isolated_per_instance() {
        let mut first = MemoryKeyValueStore::new();
        let second = MemoryKeyValueStore::new();
        first.set("lastQuoteIndex", "2").unwrap();

        assert_eq!(first.peek("lastQuoteIndex"), Some("2"));
        assert!(second.is_empty());
    }
}
