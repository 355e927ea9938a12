use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{
        credential::{Credential, HashedPassword},
        registrant::RegistrantId,
    },
};

#[async_trait]
pub trait CredentialRepository: Send + Sync {
    async fn find_by_username(&self, username: &str)
    -> Result<Option<Credential>, RepositoryError>;

    async fn find_by_registrant_id(
        &self,
        id: &RegistrantId,
    ) -> Result<Option<Credential>, RepositoryError>;

    async fn update_password_hash(
        &self,
        id: &RegistrantId,
        new_hash: HashedPassword,
    ) -> Result<(), RepositoryError>;
}
