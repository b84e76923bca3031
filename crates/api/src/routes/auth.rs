//! Authentication route handlers: login, logout, and session check.

use axum::Json;
use axum::extract::State;
use tower_sessions::Session;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{CurrentUser, destroy_session, establish_session, session_user_id};
use crate::models::PublicUser;
use crate::response::ApiResponse;
use crate::services::AuthService;
use crate::services::auth::{AuthError, LoginRequest};
use crate::state::AppState;

/// Authenticate with email and password and open a session.
///
/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> Result<Json<ApiResponse<PublicUser>>> {
    let user = AuthService::new(state.pool()).login(body).await?;

    establish_session(&session, user.public_id)
        .await
        .map_err(AuthError::Session)?;
    set_sentry_user(&user.public_id, Some(user.email.as_str()));

    tracing::info!(user = %user.public_id, "login");
    Ok(Json(ApiResponse::ok("Login Successful", user.into())))
}

/// Destroy the current session.
///
/// `DELETE /logout`
pub async fn logout(session: Session) -> Result<Json<ApiResponse<()>>> {
    let user_id = session_user_id(&session).await.map_err(AuthError::Session)?;
    let Some(user_id) = user_id else {
        return Err(AuthError::NoActiveSession.into());
    };

    // Destruction failures are logged, not surfaced; the caller is logged
    // out either way
    if let Err(e) = destroy_session(&session).await {
        tracing::error!(user = %user_id, error = %e, "failed to destroy session on logout");
    }
    clear_sentry_user();

    tracing::info!(user = %user_id, "logout");
    Ok(Json(ApiResponse::message("Logout Successful")))
}

/// Return the identity bound to the current session.
///
/// `GET /session`
pub async fn session_check(CurrentUser(user): CurrentUser) -> Json<ApiResponse<PublicUser>> {
    Json(ApiResponse::ok("Session is valid", user.into()))
}
