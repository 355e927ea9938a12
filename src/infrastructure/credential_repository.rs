use async_trait::async_trait;
use tracing::debug;

use crate::domain::error::RepositoryError;
use crate::domain::models::credential::{Credential, HashedPassword};
use crate::domain::models::registrant::RegistrantId;
use crate::domain::repositories::credential_repository::CredentialRepository;
use crate::infrastructure::collections;
use crate::infrastructure::store::KeyValueStore;

#[derive(Debug, Clone)]
pub struct KvCredentialRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvCredentialRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: KeyValueStore> CredentialRepository for KvCredentialRepository<S> {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Credential>, RepositoryError> {
        let credentials = collections::load_credentials(&self.store)?;
        Ok(credentials.into_iter().find(|c| c.username() == username))
    }

    async fn find_by_registrant_id(
        &self,
        registrant_id: &RegistrantId,
    ) -> Result<Option<Credential>, RepositoryError> {
        let credentials = collections::load_credentials(&self.store)?;
        Ok(credentials
            .into_iter()
            .find(|c| c.registrant_id() == registrant_id))
    }

    async fn update_password_hash(
        &self,
        registrant_id: &RegistrantId,
        new_hash: HashedPassword,
    ) -> Result<(), RepositoryError> {
        let mut credentials = collections::load_credentials(&self.store)?;
        let credential = credentials
            .iter_mut()
            .find(|c| c.registrant_id() == registrant_id)
            .ok_or(RepositoryError::NotFound)?;
        credential.change_password(new_hash);
        collections::save_credentials(&self.store, &credentials)?;
        debug!(registrant = %registrant_id, "password hash updated");
        Ok(())
    }
}
