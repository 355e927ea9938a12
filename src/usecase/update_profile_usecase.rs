use crate::domain::{
    error::DomainError,
    models::registrant::{Registrant, RegistrantUpdate},
    repositories::registrant_repository::RegistrantRepository,
    services::session_service::SessionManager,
};

pub struct UpdateProfileUsecase<S: SessionManager, R: RegistrantRepository> {
    session_manager: S,
    registrant_repository: R,
}

impl<S: SessionManager, R: RegistrantRepository> UpdateProfileUsecase<S, R> {
    pub fn new(session_manager: S, registrant_repository: R) -> Self {
        Self {
            session_manager,
            registrant_repository,
        }
    }

    /// Merge the submitted changes into the logged-in member's own record.
    /// The target is always taken from the session slot, never from the
    /// input.
    pub async fn update(&self, changes: RegistrantUpdate) -> Result<Registrant, DomainError> {
        let id = self
            .session_manager
            .current()
            .await?
            .ok_or(DomainError::NotLoggedIn)?;

        let registrant = self.registrant_repository.update(&id, changes).await?;

        Ok(registrant)
    }
}
