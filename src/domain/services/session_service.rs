use async_trait::async_trait;

use crate::domain::{error::DomainError, models::registrant::RegistrantId};

/// The single device-local session slot: either empty (anonymous) or
/// holding the id of the authenticated registrant. A fresh process resumes
/// whatever the persisted slot holds, without re-verifying credentials.
#[async_trait]
pub trait SessionManager: Send + Sync {
    /// Authenticate as the given registrant, overwriting any stale slot.
    async fn login(&self, id: &RegistrantId) -> Result<(), DomainError>;

    /// Return to the anonymous state. A no-op when already anonymous.
    async fn logout(&self) -> Result<(), DomainError>;

    /// Pure read of the slot, no transition.
    async fn current(&self) -> Result<Option<RegistrantId>, DomainError>;
}
