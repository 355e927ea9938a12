use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Datelike, Local};
use tracing::debug;

use crate::domain::error::RepositoryError;
use crate::domain::models::registrant::Matricule;
use crate::domain::services::sequence_service::MatriculeAllocator;
use crate::infrastructure::store::{KeyValueStore, SEQUENCE_KEY};

/// Per-year counters, keyed by the year as a string so the stored JSON
/// reads as a plain object.
type SequenceMap = BTreeMap<String, u32>;

/// Matricule allocator backed by a counter map in the store. Counters are
/// partitioned by calendar year; each year starts an independent sequence
/// at 1 and old years keep their counters so reprinting history stays
/// possible.
#[derive(Debug, Clone)]
pub struct StoreSequenceAllocator<S: KeyValueStore> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> StoreSequenceAllocator<S> {
    pub fn new(store: S, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    /// Unlike the record collections, a malformed counter map is a hard
    /// error: decoding it to empty would restart the sequence and hand
    /// out matricules that are already in use.
    fn load_counters(&self) -> Result<SequenceMap, RepositoryError> {
        match self
            .store
            .get(SEQUENCE_KEY)
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
        {
            None => Ok(SequenceMap::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| RepositoryError::Storage(format!("matricule counters: {e}"))),
        }
    }

    fn save_counters(&self, counters: &SequenceMap) -> Result<(), RepositoryError> {
        let raw =
            serde_json::to_string(counters).map_err(|e| RepositoryError::Storage(e.to_string()))?;
        self.store
            .set(SEQUENCE_KEY, &raw)
            .map_err(|e| RepositoryError::Storage(e.to_string()))
    }
}

fn next_in(counters: &SequenceMap, year: i32) -> u32 {
    counters.get(&year.to_string()).copied().unwrap_or(0) + 1
}

#[async_trait]
impl<S: KeyValueStore> MatriculeAllocator for StoreSequenceAllocator<S> {
    async fn peek(&self) -> Result<Matricule, RepositoryError> {
        let counters = self.load_counters()?;
        let year = Local::now().year();
        Ok(Matricule::compose(&self.prefix, year, next_in(&counters, year)))
    }

    async fn allocate(&self) -> Result<Matricule, RepositoryError> {
        let mut counters = self.load_counters()?;
        let year = Local::now().year();
        let number = next_in(&counters, year);
        counters.insert(year.to_string(), number);
        self.save_counters(&counters)?;
        let matricule = Matricule::compose(&self.prefix, year, number);
        debug!(matricule = %matricule, "matricule allocated");
        Ok(matricule)
    }
}
