//! Session data layout.
//!
//! Only the user's public identifier lives in the session. The full user
//! record is loaded from the database on every request, so role changes and
//! account deletions take effect immediately rather than at session expiry.

/// Session keys for authentication data.
pub mod keys {
    /// Key holding the logged-in user's public identifier (a UUID).
    pub const USER_ID: &str = "user_id";
}
