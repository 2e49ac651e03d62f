use crate::domain::NotarisationId;
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    #[error("Record store lock poisoned")]
    LockPoisoned,
}

/// Key-value persistence for encoded notarisation records
///
/// `put` is an unconditional upsert. Uniqueness comes from the identifier
/// derivation, not from the store: writing the same key twice with the same
/// inputs stores identical bytes. A miss on `get` is `Ok(None)`, not an error.
pub trait RecordStore {
    fn put(&self, key: &NotarisationId, value: &[u8]) -> Result<(), StoreError>;
    fn get(&self, key: &NotarisationId) -> Result<Option<Vec<u8>>, StoreError>;
    fn count(&self) -> Result<usize, StoreError>;
}

pub struct SqliteRecordStore {
    conn: Connection,
}

impl SqliteRecordStore {
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn new_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    fn init_schema(conn: &Connection) -> Result<(), StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS notarisations (
                id BLOB PRIMARY KEY,
                details BLOB NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}

impl RecordStore for SqliteRecordStore {
    fn put(&self, key: &NotarisationId, value: &[u8]) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO notarisations (id, details) VALUES (?1, ?2)",
            params![key.as_bytes().as_slice(), value],
        )?;

        Ok(())
    }

    fn get(&self, key: &NotarisationId) -> Result<Option<Vec<u8>>, StoreError> {
        let details = self
            .conn
            .query_row(
                "SELECT details FROM notarisations WHERE id = ?1",
                params![key.as_bytes().as_slice()],
                |row| row.get(0),
            )
            .optional()?;

        Ok(details)
    }

    fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notarisations", [], |row| row.get(0))?;

        Ok(count as usize)
    }
}
