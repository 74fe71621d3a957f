use super::{DocumentStore, StoreError, document_ref, merge, new_id, now_ts};
use common::model::{Athlete, AthleteData};
use std::sync::RwLock;

/// Volatile store kept in a vector. Used by the route tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<Athlete>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn all(&self) -> Result<Vec<Athlete>, StoreError> {
        let documents = self.documents.read().map_err(|_| StoreError::Poisoned)?;
        Ok(documents.clone())
    }

    fn get(&self, id: &str) -> Result<Athlete, StoreError> {
        let documents = self.documents.read().map_err(|_| StoreError::Poisoned)?;
        documents
            .iter()
            .find(|doc| doc.id() == Some(id))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn update(&self, id: &str, patch: &AthleteData) -> Result<Athlete, StoreError> {
        let mut documents = self.documents.write().map_err(|_| StoreError::Poisoned)?;
        let doc = documents
            .iter_mut()
            .find(|doc| doc.id() == Some(id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        merge(&mut doc.data, patch);
        doc.ts = Some(now_ts());
        Ok(doc.clone())
    }

    fn insert(&self, data: AthleteData) -> Result<Athlete, StoreError> {
        let athlete = Athlete {
            reference: document_ref(&new_id()),
            ts: Some(now_ts()),
            data,
        };
        let mut documents = self.documents.write().map_err(|_| StoreError::Poisoned)?;
        documents.push(athlete.clone());
        Ok(athlete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_and_update() {
        let store = MemoryStore::new();
        assert!(store.is_empty().unwrap());

        let inserted = store
            .insert(AthleteData {
                name: Some("Ana".into()),
                ..Default::default()
            })
            .unwrap();
        let id = inserted.id().unwrap().to_string();

        let patch = AthleteData {
            surname: Some("Ruiz".into()),
            ..Default::default()
        };
        let updated = store.update(&id, &patch).unwrap();
        assert_eq!(updated.data.name.as_deref(), Some("Ana"));
        assert_eq!(updated.data.surname.as_deref(), Some("Ruiz"));
        assert_eq!(store.get(&id).unwrap(), updated);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(store.get("nope"), Err(StoreError::NotFound(_))));
        assert!(matches!(
            store.update("nope", &AthleteData::default()),
            Err(StoreError::NotFound(_))
        ));
    }
}
