use crate::domain::{
    error::{DomainError, RepositoryError},
    repositories::credential_repository::CredentialRepository,
    services::{
        password_service::{MIN_PASSWORD_LEN, PasswordHasher},
        session_service::SessionManager,
    },
};

pub struct ChangePasswordUsecase<S: SessionManager, C: CredentialRepository, P: PasswordHasher> {
    session_manager: S,
    credential_repository: C,
    password_hasher: P,
}

impl<S: SessionManager, C: CredentialRepository, P: PasswordHasher>
    ChangePasswordUsecase<S, C, P>
{
    pub fn new(session_manager: S, credential_repository: C, password_hasher: P) -> Self {
        Self {
            session_manager,
            credential_repository,
            password_hasher,
        }
    }

    /// Replace the logged-in member's password. The current password is
    /// verified before the new one is inspected, so a wrong current entry
    /// wins over a too-short replacement.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        let id = self
            .session_manager
            .current()
            .await?
            .ok_or(DomainError::NotLoggedIn)?;

        let credential = self
            .credential_repository
            .find_by_registrant_id(&id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if !self
            .password_hasher
            .verify(current_password, credential.password_hash())?
        {
            return Err(DomainError::AuthenticationFailed);
        }

        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::PasswordTooShort);
        }

        let new_hash = self.password_hasher.hash(new_password)?;
        self.credential_repository
            .update_password_hash(&id, new_hash)
            .await?;

        Ok(())
    }
}
