//! Authentication middleware and extractors.
//!
//! `CurrentUser` resolves the session to a fresh user record on every
//! request; `RequireAdmin` layers the role gate on top. Both reject with
//! `ApiError`, so failures surface as the standard response envelope. The
//! role is always read from the freshly loaded record, never from anything
//! the client could influence.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_sessions::Session;
use uuid::Uuid;

use crate::db::users::UserRepository;
use crate::error::ApiError;
use crate::models::{AuthedUser, session_keys};
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Extractor that requires an authenticated caller.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     CurrentUser(user): CurrentUser,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct CurrentUser(pub AuthedUser);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthError::NotAuthenticated)?;

        let public_id: Option<Uuid> = session
            .get(session_keys::USER_ID)
            .await
            .map_err(AuthError::Session)?;
        let public_id = public_id.ok_or(AuthError::NotAuthenticated)?;

        // Load the user fresh so role changes and deletions take effect
        // immediately
        let user = UserRepository::new(state.pool())
            .get_by_public_id(public_id)
            .await
            .map_err(AuthError::Repository)?
            .ok_or(AuthError::UserNotFound)?;

        Ok(Self(user.into()))
    }
}

/// Extractor that requires an authenticated caller with the Admin role.
///
/// # Example
///
/// ```rust,ignore
/// async fn admin_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.name)
/// }
/// ```
pub struct RequireAdmin(pub AuthedUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        if !user.role.is_admin() {
            return Err(ApiError::AccessDenied);
        }

        Ok(Self(user))
    }
}

/// Helper to bind a user to the session after login.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn establish_session(
    session: &Session,
    public_id: Uuid,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::USER_ID, public_id).await
}

/// Helper to read the session's user identifier, if any.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn session_user_id(
    session: &Session,
) -> Result<Option<Uuid>, tower_sessions::session::Error> {
    session.get(session_keys::USER_ID).await
}

/// Helper to destroy the session record and clear the client cookie.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn destroy_session(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
