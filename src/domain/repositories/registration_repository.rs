use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{
        credential::HashedPassword,
        registrant::{Registrant, RegistrantDraft},
    },
};

/// Repository for signup that creates the registrant and its credential as
/// one unit: both records exist afterwards or neither does.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Register a new member. Rejects the draft when any existing
    /// registrant already uses its phone number or email address
    /// (case-sensitive exact match); otherwise assigns a fresh opaque id
    /// and the next matricule, stamps the creation time and appends the
    /// registrant together with its credential.
    async fn register(
        &self,
        draft: &RegistrantDraft,
        password_hash: HashedPassword,
    ) -> Result<Registrant, RepositoryError>;
}
