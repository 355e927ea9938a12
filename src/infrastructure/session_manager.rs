use async_trait::async_trait;
use tracing::debug;

use crate::domain::error::{DomainError, RepositoryError};
use crate::domain::models::registrant::RegistrantId;
use crate::domain::services::session_service::SessionManager;
use crate::infrastructure::store::{KeyValueStore, SESSION_KEY};

/// Session state held in the store itself, so "logged in" survives
/// process restarts exactly like the record collections do. At most one
/// session exists; logging in replaces it.
#[derive(Debug, Clone)]
pub struct StoreSessionManager<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoreSessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: KeyValueStore> SessionManager for StoreSessionManager<S> {
    async fn login(&self, id: &RegistrantId) -> Result<(), DomainError> {
        self.store
            .set(SESSION_KEY, id.as_str())
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        debug!(registrant = %id, "session opened");
        Ok(())
    }

    async fn logout(&self) -> Result<(), DomainError> {
        self.store
            .remove(SESSION_KEY)
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        debug!("session closed");
        Ok(())
    }

    async fn current(&self) -> Result<Option<RegistrantId>, DomainError> {
        let slot = self
            .store
            .get(SESSION_KEY)
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(slot.filter(|id| !id.is_empty()).map(RegistrantId::from))
    }
}
