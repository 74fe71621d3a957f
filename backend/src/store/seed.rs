//! Bundled athletes loaded into an empty collection.

use super::{DocumentStore, StoreError};
use common::model::AthleteData;
use log::info;

const SEED: &str = include_str!("../../seed/deportistas.json");

pub fn athletes() -> Result<Vec<AthleteData>, StoreError> {
    Ok(serde_json::from_str(SEED)?)
}

/// Inserts the bundled athletes if the store holds none. Returns how many
/// documents were inserted.
pub fn seed_if_empty(store: &dyn DocumentStore) -> Result<usize, StoreError> {
    if !store.is_empty()? {
        return Ok(0);
    }

    let athletes = athletes()?;
    let count = athletes.len();
    for data in athletes {
        store.insert(data)?;
    }
    info!("Colección vacía: {} deportistas de ejemplo cargados", count);
    Ok(count)
}
