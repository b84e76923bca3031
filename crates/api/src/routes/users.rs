//! User management route handlers.
//!
//! Registration is open; every other operation requires an Admin session.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::PublicUser;
use crate::response::ApiResponse;
use crate::services::UserService;
use crate::services::users::{RegisterRequest, UpdateUserRequest};
use crate::state::AppState;

use super::parse_public_id;

/// Register a new user.
///
/// `POST /user`
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PublicUser>>)> {
    let user = UserService::new(state.pool()).register(body).await?;

    tracing::info!(user = %user.public_id, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Register Success", user.into())),
    ))
}

/// List every user.
///
/// `GET /user`
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PublicUser>>>> {
    let users = UserService::new(state.pool()).list().await?;
    let data = users.into_iter().map(PublicUser::from).collect();

    Ok(Json(ApiResponse::ok("Success Get All User", data)))
}

/// Get a single user.
///
/// `GET /user/{uuid}`
pub async fn get(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<ApiResponse<PublicUser>>> {
    let public_id = parse_public_id(&uuid, "User Not Found")?;
    let user = UserService::new(state.pool()).get(public_id).await?;

    Ok(Json(ApiResponse::ok("Success Get User", user.into())))
}

/// Update a user.
///
/// `PUT /user/{uuid}`
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<()>>> {
    let public_id = parse_public_id(&uuid, "User Not Found")?;
    UserService::new(state.pool()).update(public_id, body).await?;

    tracing::info!(user = %public_id, by = %admin.public_id, "user updated");
    Ok(Json(ApiResponse::message("Success Update User")))
}

/// Delete a user.
///
/// `DELETE /user/{uuid}`
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    let public_id = parse_public_id(&uuid, "User Not Found")?;
    UserService::new(state.pool()).delete(public_id).await?;

    tracing::info!(user = %public_id, by = %admin.public_id, "user deleted");
    Ok(Json(ApiResponse::message("Success Delete User")))
}
