use crate::domain::{error::DomainError, models::credential::HashedPassword};

/// Minimum accepted password length, enforced at signup and at
/// change-password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Service for hashing and verifying passwords. Length policy belongs to
/// the signup and change-password operations, not to the hasher.
pub trait PasswordHasher: Clone {
    /// Hash a plain text password
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError>;

    /// Verify a plain text password against a hashed password
    fn verify(
        &self,
        plain_password: &str,
        hashed_password: &HashedPassword,
    ) -> Result<bool, DomainError>;
}
