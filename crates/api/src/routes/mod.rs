//! HTTP route handlers for the stockroom API.
//!
//! # Route Structure
//!
//! ```text
//! # Session
//! POST   /login           - Authenticate, open a session
//! DELETE /logout          - Destroy the session
//! GET    /session         - Identity bound to the current session
//!
//! # Users (registration open, management Admin-only)
//! POST   /user            - Register
//! GET    /user            - List all users
//! GET    /user/{uuid}     - Single user
//! PUT    /user/{uuid}     - Update
//! DELETE /user/{uuid}     - Delete
//!
//! # Products (authenticated, scoped to the owner unless Admin)
//! GET    /products        - Scoped list
//! POST   /product         - Create, owner is the caller
//! GET    /product/{uuid}  - Scoped single
//! PUT    /product/{uuid}  - Scoped update
//! DELETE /product/{uuid}  - Scoped delete
//! ```

pub mod auth;
pub mod products;
pub mod users;

use axum::Router;
use axum::routing::{delete, get, post};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", delete(auth::logout))
        .route("/session", get(auth::session_check))
        .route("/user", post(users::create).get(users::list))
        .route(
            "/user/{uuid}",
            get(users::get).put(users::update).delete(users::remove),
        )
        .route("/products", get(products::list))
        .route("/product", post(products::create))
        .route(
            "/product/{uuid}",
            get(products::get)
                .put(products::update)
                .delete(products::remove),
        )
}

/// Parse a path segment as a public identifier.
///
/// A segment that is not a UUID cannot name any record, so the resource's
/// not-found message is returned instead of a bare 400.
fn parse_public_id(raw: &str, not_found: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound(not_found.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_public_id_accepts_uuids() {
        let uuid = parse_public_id("a9b7ba70-783b-4f58-a319-b7ec5dbbd5d3", "User Not Found");

        assert!(uuid.is_ok());
    }

    #[test]
    fn test_parse_public_id_maps_garbage_to_not_found() {
        let err = match parse_public_id("definitely-not-a-uuid", "Product Not Found") {
            Err(err) => err,
            Ok(_) => panic!("expected an error"),
        };

        assert!(matches!(err, ApiError::NotFound(message) if message == "Product Not Found"));
    }
}
