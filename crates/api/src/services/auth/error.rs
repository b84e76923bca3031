//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication and session handling.
///
/// The display strings of the client-facing variants are the exact messages
/// returned in response envelopes.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No session value is present, or the session has expired.
    #[error("Please Login to Your Account")]
    NotAuthenticated,

    /// No account matches the email, or the session references a user that
    /// no longer exists.
    #[error("User Not Found")]
    UserNotFound,

    /// The password does not match the stored hash.
    #[error("Password Incorrect")]
    PasswordIncorrect,

    /// Logout was requested without an authenticated session.
    #[error("No active session. Please login first.")]
    NoActiveSession,

    /// Password hashing failed.
    #[error("password hashing error")]
    PasswordHash,

    /// Session store operation failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Repository/database error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
