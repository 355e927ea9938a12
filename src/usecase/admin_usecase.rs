use crate::domain::{
    error::DomainError,
    models::registrant::{Registrant, RegistrantId, RegistrantUpdate},
    repositories::registrant_repository::RegistrantRepository,
};

/// Administrative operations over the whole collection. The admin gate is
/// a per-invocation secret check in the presentation layer; nothing here
/// distinguishes an admin from the code path that invoked it.
pub struct AdminUsecase<R: RegistrantRepository> {
    registrant_repository: R,
}

impl<R: RegistrantRepository> AdminUsecase<R> {
    pub fn new(registrant_repository: R) -> Self {
        Self {
            registrant_repository,
        }
    }

    /// Every stored member, in insertion order.
    pub async fn list(&self) -> Result<Vec<Registrant>, DomainError> {
        Ok(self.registrant_repository.list().await?)
    }

    /// Edit any member's record. Same merge semantics as a member's own
    /// profile edit, including the credential rename on email change.
    pub async fn edit(
        &self,
        id: &RegistrantId,
        changes: RegistrantUpdate,
    ) -> Result<Registrant, DomainError> {
        Ok(self.registrant_repository.update(id, changes).await?)
    }

    /// Remove a member and their credential. A session still pointing at
    /// the removed member is left in place and surfaces as a missing
    /// profile on its next use.
    pub async fn delete(&self, id: &RegistrantId) -> Result<(), DomainError> {
        Ok(self.registrant_repository.delete(id).await?)
    }
}
