use crate::domain::{
    error::DomainError,
    models::registrant::RegistrantId,
    repositories::credential_repository::CredentialRepository,
    services::{password_service::PasswordHasher, session_service::SessionManager},
};

pub struct LoginUsecase<C: CredentialRepository, S: SessionManager, P: PasswordHasher> {
    credential_repository: C,
    session_manager: S,
    password_hasher: P,
}

impl<C: CredentialRepository, S: SessionManager, P: PasswordHasher> LoginUsecase<C, S, P> {
    pub fn new(credential_repository: C, session_manager: S, password_hasher: P) -> Self {
        Self {
            credential_repository,
            session_manager,
            password_hasher,
        }
    }

    /// Authenticate with the email address used at signup. An unknown email
    /// and a wrong password surface as the same error; the session slot is
    /// only written on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<RegistrantId, DomainError> {
        let credential = self
            .credential_repository
            .find_by_username(email)
            .await?
            .ok_or(DomainError::AuthenticationFailed)?;

        if !self
            .password_hasher
            .verify(password, credential.password_hash())?
        {
            return Err(DomainError::AuthenticationFailed);
        }

        self.session_manager.login(credential.registrant_id()).await?;

        Ok(credential.registrant_id().clone())
    }
}
