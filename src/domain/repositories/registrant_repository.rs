use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::registrant::{Registrant, RegistrantId, RegistrantUpdate},
};

#[async_trait]
pub trait RegistrantRepository: Send + Sync {
    /// Full decode of the stored collection. Malformed stored JSON degrades
    /// to an empty listing rather than failing.
    async fn list(&self) -> Result<Vec<Registrant>, RepositoryError>;

    async fn find_by_id(&self, id: &RegistrantId)
    -> Result<Option<Registrant>, RepositoryError>;

    /// Merge the provided fields into an existing record and persist the
    /// whole collection. When the email changes, the owning credential is
    /// renamed to the new address in the same operation. Duplicate phone or
    /// email introduced by an edit is deliberately not rejected here;
    /// uniqueness is a creation-time rule only.
    async fn update(
        &self,
        id: &RegistrantId,
        changes: RegistrantUpdate,
    ) -> Result<Registrant, RepositoryError>;

    /// Remove the registrant and, as one unit, the credential it owns.
    /// Never leaves an orphaned credential behind.
    async fn delete(&self, id: &RegistrantId) -> Result<(), RepositoryError>;
}
