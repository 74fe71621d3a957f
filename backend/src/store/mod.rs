//! # Document Store
//!
//! Persistence for the `Deportistas` collection. Every athlete is a JSON
//! document addressed by its id, with a write timestamp in microseconds, the
//! same shape the microservice returns to the front-end.
//!
//! The handlers only see the [`DocumentStore`] trait. [`SqliteStore`] backs
//! the running service; `MemoryStore` backs the route tests.

#[cfg(test)]
mod memory;
pub mod seed;
mod sqlite;

use chrono::Utc;
use common::model::{Athlete, AthleteData, DocumentRef};
use serde_json::json;
use thiserror::Error;

#[cfg(test)]
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Name of the only collection the service manages.
pub const COLLECTION: &str = "Deportistas";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("instance not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("invalid document: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("store lock poisoned")]
    Poisoned,
}

/// Operations the microservice needs from the document database.
pub trait DocumentStore: Send + Sync {
    /// Every document of the collection, in insertion order.
    fn all(&self) -> Result<Vec<Athlete>, StoreError>;

    fn get(&self, id: &str) -> Result<Athlete, StoreError>;

    /// Merges `patch` into the stored data: fields present in the patch replace
    /// the stored ones, everything else is kept. Returns the updated document.
    fn update(&self, id: &str, patch: &AthleteData) -> Result<Athlete, StoreError>;

    /// Stores a new document under a fresh id.
    fn insert(&self, data: AthleteData) -> Result<Athlete, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.all()?.is_empty())
    }
}

/// Reference of a document of the collection, with the collection attached.
pub fn document_ref(id: &str) -> DocumentRef {
    let mut reference = DocumentRef::new(id);
    reference.inner.collection = Some(json!({
        "@ref": { "id": COLLECTION, "collection": { "@ref": { "id": "collections" } } }
    }));
    reference
}

pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Write timestamp, microseconds since the epoch.
pub fn now_ts() -> i64 {
    Utc::now().timestamp_micros()
}

/// Top-level merge of `patch` into `target`.
pub fn merge(target: &mut AthleteData, patch: &AthleteData) {
    if let Some(name) = &patch.name {
        target.name = Some(name.clone());
    }
    if let Some(surname) = &patch.surname {
        target.surname = Some(surname.clone());
    }
    if let Some(birth_date) = &patch.birth_date {
        target.birth_date = Some(birth_date.clone());
    }
    if let Some(nationality) = &patch.nationality {
        target.nationality = Some(nationality.clone());
    }
    if let Some(world) = &patch.world_participation {
        target.world_participation = Some(world.clone());
    }
    if let Some(olympics) = &patch.olympic_games {
        target.olympic_games = Some(olympics.clone());
    }
    for (key, value) in &patch.extra {
        target.extra.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::{Nationality, Scalar};

    #[test]
    fn merge_replaces_only_present_fields() {
        let mut stored = AthleteData {
            name: Some("Juan".into()),
            surname: Some("Pérez".into()),
            olympic_games: Some(Scalar::Integer(2)),
            ..Default::default()
        };
        let patch = AthleteData {
            name: Some("Juana".into()),
            nationality: Some(Nationality::Plain("Perú".into())),
            ..Default::default()
        };

        merge(&mut stored, &patch);

        assert_eq!(stored.name.as_deref(), Some("Juana"));
        assert_eq!(stored.surname.as_deref(), Some("Pérez"));
        assert_eq!(stored.nationality, Some(Nationality::Plain("Perú".into())));
        assert_eq!(stored.olympic_games, Some(Scalar::Integer(2)));
    }

    #[test]
    fn document_ref_points_at_the_collection() {
        let value = serde_json::to_value(document_ref("42")).unwrap();
        assert_eq!(value["@ref"]["id"], "42");
        assert_eq!(value["@ref"]["collection"]["@ref"]["id"], COLLECTION);
    }

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }
}
