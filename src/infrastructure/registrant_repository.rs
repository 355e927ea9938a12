use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::error::RepositoryError;
use crate::domain::models::registrant::{Registrant, RegistrantId, RegistrantUpdate};
use crate::domain::repositories::registrant_repository::RegistrantRepository;
use crate::infrastructure::collections;
use crate::infrastructure::store::KeyValueStore;

#[derive(Debug, Clone)]
pub struct KvRegistrantRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvRegistrantRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: KeyValueStore> RegistrantRepository for KvRegistrantRepository<S> {
    async fn list(&self) -> Result<Vec<Registrant>, RepositoryError> {
        collections::load_registrants(&self.store)
    }

    async fn find_by_id(&self, id: &RegistrantId) -> Result<Option<Registrant>, RepositoryError> {
        let registrants = collections::load_registrants(&self.store)?;
        Ok(registrants.into_iter().find(|r| r.id() == id))
    }

    async fn update(
        &self,
        id: &RegistrantId,
        changes: RegistrantUpdate,
    ) -> Result<Registrant, RepositoryError> {
        let mut registrants = collections::load_registrants(&self.store)?;
        let registrant = registrants
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(RepositoryError::NotFound)?;

        let old_email = registrant.email().to_string();
        registrant.apply(changes);
        let updated = registrant.clone();

        // An email change renames the matching credential so the member can
        // still log in. Written before the registrants collection: a torn
        // update must not leave a profile whose login no longer matches it.
        if updated.email() != old_email {
            let mut credentials = collections::load_credentials(&self.store)?;
            if let Some(credential) = credentials.iter_mut().find(|c| c.registrant_id() == id) {
                credential.rename(updated.email().to_string());
                collections::save_credentials(&self.store, &credentials)?;
            }
        }

        collections::save_registrants(&self.store, &registrants)?;
        debug!(registrant = %id, "profile updated");
        Ok(updated)
    }

    async fn delete(&self, id: &RegistrantId) -> Result<(), RepositoryError> {
        let mut registrants = collections::load_registrants(&self.store)?;
        let before = registrants.len();
        registrants.retain(|r| r.id() != id);
        if registrants.len() == before {
            return Err(RepositoryError::NotFound);
        }

        let mut credentials = collections::load_credentials(&self.store)?;
        credentials.retain(|c| c.registrant_id() != id);

        // Credentials first: a torn delete must never leave a credential
        // pointing at a registrant that is gone.
        collections::save_credentials(&self.store, &credentials)?;
        collections::save_registrants(&self.store, &registrants)?;
        info!(registrant = %id, "registrant deleted");
        Ok(())
    }
}
