use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::domain::error::RepositoryError;
use crate::domain::models::credential::{Credential, HashedPassword};
use crate::domain::models::registrant::{Registrant, RegistrantDraft, RegistrantId};
use crate::domain::repositories::registration_repository::RegistrationRepository;
use crate::domain::services::sequence_service::MatriculeAllocator;
use crate::infrastructure::collections;
use crate::infrastructure::sequence_allocator::StoreSequenceAllocator;
use crate::infrastructure::store::KeyValueStore;

/// Store-backed signup. Registration touches three keys (counter map,
/// credentials, registrants); the writes are ordered so that the torn
/// states a crash can leave behind are the harmless ones: a burned
/// matricule number, or a credential without a profile, never a profile
/// without a login.
#[derive(Debug, Clone)]
pub struct KvRegistrationRepository<S: KeyValueStore> {
    store: S,
    allocator: StoreSequenceAllocator<S>,
}

impl<S: KeyValueStore> KvRegistrationRepository<S> {
    pub fn new(store: S, allocator: StoreSequenceAllocator<S>) -> Self {
        Self { store, allocator }
    }
}

#[async_trait]
impl<S: KeyValueStore> RegistrationRepository for KvRegistrationRepository<S> {
    async fn register(
        &self,
        draft: &RegistrantDraft,
        password_hash: HashedPassword,
    ) -> Result<Registrant, RepositoryError> {
        let mut registrants = collections::load_registrants(&self.store)?;
        if registrants.iter().any(|r| r.tel() == draft.tel) {
            return Err(RepositoryError::Duplicate("tel"));
        }
        if registrants.iter().any(|r| r.email() == draft.email) {
            return Err(RepositoryError::Duplicate("email"));
        }

        let id = RegistrantId::generate();
        let matricule = self.allocator.allocate().await?;
        let registrant = Registrant::from_draft(draft, id.clone(), matricule, Utc::now());
        let credential = Credential::new(draft.email.clone(), password_hash, id);

        let mut credentials = collections::load_credentials(&self.store)?;
        credentials.push(credential);
        registrants.push(registrant.clone());

        collections::save_credentials(&self.store, &credentials)?;
        collections::save_registrants(&self.store, &registrants)?;

        info!(matricule = %registrant.matricule(), "registrant created");
        Ok(registrant)
    }
}
