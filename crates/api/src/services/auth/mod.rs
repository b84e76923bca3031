//! Authentication service.
//!
//! Validates login credentials and owns the password hashing primitives.
//! Hashing and verification run on the blocking thread pool; Argon2 is
//! CPU-expensive and must not stall the async workers.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::Deserialize;
use sqlx::PgPool;

use stockroom_core::Email;

use crate::db::users::UserRepository;
use crate::models::user::User;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Login with email and password.
    ///
    /// A missing or unparseable email cannot belong to any account, so both
    /// report the same way as an unknown one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if no account matches the email.
    /// Returns `AuthError::PasswordIncorrect` if the password doesn't verify.
    pub async fn login(&self, request: LoginRequest) -> Result<User, AuthError> {
        let raw_email = request.email.unwrap_or_default();
        let Ok(email) = Email::parse(&raw_email) else {
            return Err(AuthError::UserNotFound);
        };

        let (user, stored_hash) = self
            .users
            .get_with_password_hash(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let password = request.password.unwrap_or_default();
        verify_password(password, stored_hash).await?;

        Ok(user)
    }
}

/// Hash a password with Argon2id and a fresh random salt, on the blocking
/// pool.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub async fn hash_password(password: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || hash_password_sync(&password))
        .await
        .map_err(|_| AuthError::PasswordHash)?
}

/// Verify a password against a stored hash, on the blocking pool.
///
/// # Errors
///
/// Returns `AuthError::PasswordIncorrect` if the hash doesn't match.
pub async fn verify_password(password: String, hash: String) -> Result<(), AuthError> {
    tokio::task::spawn_blocking(move || verify_password_sync(&password, &hash))
        .await
        .map_err(|_| AuthError::PasswordHash)?
}

/// Hash a password using Argon2id.
fn hash_password_sync(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password_sync(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::PasswordIncorrect)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::PasswordIncorrect)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery".to_owned()).await.unwrap();

        assert_ne!(hash, "correct horse battery");
        assert!(hash.starts_with("$argon2"));
        verify_password("correct horse battery".to_owned(), hash)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let hash = hash_password("correct horse battery".to_owned()).await.unwrap();
        let err = verify_password("wrong horse battery".to_owned(), hash)
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::PasswordIncorrect));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Fresh salt per hash
        let first = hash_password_sync("pw123456").unwrap();
        let second = hash_password_sync("pw123456").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_stored_hash_never_verifies() {
        let err = verify_password_sync("pw123456", "not-a-phc-string").unwrap_err();

        assert!(matches!(err, AuthError::PasswordIncorrect));
    }
}
