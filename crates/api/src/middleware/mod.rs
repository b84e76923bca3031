//! HTTP middleware for the stockroom API.
//!
//! # Middleware
//!
//! - `auth` - Authentication extractors and session helpers
//! - `session` - tower-sessions layer over the `PostgreSQL` store

pub mod auth;
pub mod session;

pub use auth::{CurrentUser, RequireAdmin, destroy_session, establish_session, session_user_id};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
