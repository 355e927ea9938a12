//! Whole-collection load/save helpers shared by the store-backed
//! repositories. Every repository operation re-reads the full collection,
//! mutates it in memory and writes it back; there is no per-record
//! access path.

use crate::domain::error::RepositoryError;
use crate::domain::models::credential::Credential;
use crate::domain::models::registrant::Registrant;
use crate::infrastructure::store::{CREDENTIALS_KEY, KeyValueStore, REGISTRANTS_KEY};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Reads a JSON-array collection under `key`. An absent key and a value
/// that fails to parse both decode to the empty collection, so a corrupt
/// entry degrades to "no records" instead of failing every operation.
fn load<S: KeyValueStore, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Vec<T>, RepositoryError> {
    let raw = store
        .get(key)
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    Ok(raw
        .map(|raw| serde_json::from_str(&raw).unwrap_or_default())
        .unwrap_or_default())
}

fn save<S: KeyValueStore, T: Serialize>(
    store: &S,
    key: &str,
    records: &[T],
) -> Result<(), RepositoryError> {
    let raw =
        serde_json::to_string(records).map_err(|e| RepositoryError::Storage(e.to_string()))?;
    store
        .set(key, &raw)
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

pub(crate) fn load_registrants<S: KeyValueStore>(
    store: &S,
) -> Result<Vec<Registrant>, RepositoryError> {
    load(store, REGISTRANTS_KEY)
}

pub(crate) fn save_registrants<S: KeyValueStore>(
    store: &S,
    registrants: &[Registrant],
) -> Result<(), RepositoryError> {
    save(store, REGISTRANTS_KEY, registrants)
}

pub(crate) fn load_credentials<S: KeyValueStore>(
    store: &S,
) -> Result<Vec<Credential>, RepositoryError> {
    load(store, CREDENTIALS_KEY)
}

pub(crate) fn save_credentials<S: KeyValueStore>(
    store: &S,
    credentials: &[Credential],
) -> Result<(), RepositoryError> {
    save(store, CREDENTIALS_KEY, credentials)
}
