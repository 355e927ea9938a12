use crate::domain::{
    error::{DomainError, RepositoryError},
    models::registrant::Registrant,
    repositories::registrant_repository::RegistrantRepository,
    services::session_service::SessionManager,
};

pub struct ShowProfileUsecase<S: SessionManager, R: RegistrantRepository> {
    session_manager: S,
    registrant_repository: R,
}

impl<S: SessionManager, R: RegistrantRepository> ShowProfileUsecase<S, R> {
    pub fn new(session_manager: S, registrant_repository: R) -> Self {
        Self {
            session_manager,
            registrant_repository,
        }
    }

    /// Resolve the logged-in member's record. Fails when anonymous, and
    /// when the session still points at a registrant an admin has since
    /// deleted.
    pub async fn show(&self) -> Result<Registrant, DomainError> {
        let id = self
            .session_manager
            .current()
            .await?
            .ok_or(DomainError::NotLoggedIn)?;

        let registrant = self
            .registrant_repository
            .find_by_id(&id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(registrant)
    }
}
