use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("No registrant is logged in")]
    NotLoggedIn,

    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    #[error("Password entries do not match")]
    PasswordMismatch,

    #[error("Password too short (minimum 6 characters required)")]
    PasswordTooShort,

    #[error("Consent flag not set")]
    ConsentRequired,

    #[error("Card rendering failed: {0}")]
    CardRender(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Duplicate {0}")]
    Duplicate(&'static str),

    #[error("Storage error: {0}")]
    Storage(String),
}
