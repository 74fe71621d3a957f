//! SQLite-backed store.
//!
//! Documents live in one table, keyed by `(collection, id)`, with the data
//! fields serialized as JSON text. The connection is shared behind a mutex;
//! every operation holds it for the whole read-modify-write.

use super::{COLLECTION, DocumentStore, StoreError, document_ref, merge, new_id, now_ts};
use common::model::{Athlete, AthleteData};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS documents (
    collection TEXT NOT NULL,
    id         TEXT NOT NULL,
    ts         INTEGER NOT NULL,
    data       TEXT NOT NULL,
    PRIMARY KEY (collection, id)
)";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) the database file. `":memory:"` opens an in-memory
    /// database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if path == Path::new(":memory:") {
            return Self::open_in_memory();
        }
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(SCHEMA, [])?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

fn to_athlete(id: String, ts: i64, data: &str) -> Result<Athlete, StoreError> {
    Ok(Athlete {
        reference: document_ref(&id),
        ts: Some(ts),
        data: serde_json::from_str(data)?,
    })
}

fn fetch(conn: &Connection, id: &str) -> Result<Athlete, StoreError> {
    let row: Option<(i64, String)> = conn
        .query_row(
            "SELECT ts, data FROM documents WHERE collection = ?1 AND id = ?2",
            params![COLLECTION, id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match row {
        Some((ts, data)) => to_athlete(id.to_string(), ts, &data),
        None => Err(StoreError::NotFound(id.to_string())),
    }
}

impl DocumentStore for SqliteStore {
    fn all(&self) -> Result<Vec<Athlete>, StoreError> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT id, ts, data FROM documents WHERE collection = ?1 ORDER BY rowid")?;
        let rows = stmt
            .query_map(params![COLLECTION], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?, row.get::<_, String>(2)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, ts, data)| to_athlete(id, ts, &data))
            .collect()
    }

    fn get(&self, id: &str) -> Result<Athlete, StoreError> {
        let conn = self.lock()?;
        fetch(&conn, id)
    }

    fn update(&self, id: &str, patch: &AthleteData) -> Result<Athlete, StoreError> {
        let conn = self.lock()?;
        let mut athlete = fetch(&conn, id)?;
        merge(&mut athlete.data, patch);
        let ts = now_ts();
        conn.execute(
            "UPDATE documents SET ts = ?1, data = ?2 WHERE collection = ?3 AND id = ?4",
            params![ts, serde_json::to_string(&athlete.data)?, COLLECTION, id],
        )?;
        athlete.ts = Some(ts);
        debug!("Deportista {} actualizado", id);
        Ok(athlete)
    }

    fn insert(&self, data: AthleteData) -> Result<Athlete, StoreError> {
        let conn = self.lock()?;
        let id = new_id();
        let ts = now_ts();
        conn.execute(
            "INSERT INTO documents (collection, id, ts, data) VALUES (?1, ?2, ?3, ?4)",
            params![COLLECTION, &id, ts, serde_json::to_string(&data)?],
        )?;
        Ok(Athlete {
            reference: document_ref(&id),
            ts: Some(ts),
            data,
        })
    }

    fn is_empty(&self) -> Result<bool, StoreError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM documents WHERE collection = ?1",
            params![COLLECTION],
            |row| row.get(0),
        )?;
        Ok(count == 0)
    }
}
