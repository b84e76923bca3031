//! Product route handlers.
//!
//! Every operation requires an authenticated session; the service scopes
//! results by ownership, with admins reaching everything.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::models::{ProductPayload, ProductSummary};
use crate::response::ApiResponse;
use crate::services::ProductService;
use crate::services::products::{CreateProductRequest, UpdateProductRequest};
use crate::state::AppState;

use super::parse_public_id;

/// List the products visible to the caller.
///
/// `GET /products`
pub async fn list(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ProductPayload>>>> {
    let products = ProductService::new(state.pool()).list(&user).await?;
    let data = products.into_iter().map(ProductPayload::from).collect();

    Ok(Json(ApiResponse::ok("Success Get All Product", data)))
}

/// Get a single product.
///
/// `GET /product/{uuid}`
pub async fn get(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<ApiResponse<ProductPayload>>> {
    let public_id = parse_public_id(&uuid, "Product Not Found")?;
    let found = ProductService::new(state.pool()).get(&user, public_id).await?;

    Ok(Json(ApiResponse::ok(
        "Success Get Product By ID",
        found.into(),
    )))
}

/// Create a product owned by the caller.
///
/// `POST /product`
pub async fn create(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductSummary>>)> {
    let product = ProductService::new(state.pool()).create(&user, body).await?;

    tracing::info!(product = %product.public_id, owner = %user.public_id, "product created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Success Create Product", product.into())),
    ))
}

/// Update a product.
///
/// `PUT /product/{uuid}`
pub async fn update(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ApiResponse<()>>> {
    let public_id = parse_public_id(&uuid, "Product Not Found")?;
    ProductService::new(state.pool())
        .update(&user, public_id, body)
        .await?;

    tracing::info!(product = %public_id, by = %user.public_id, "product updated");
    Ok(Json(ApiResponse::message("Success Update Product")))
}

/// Delete a product.
///
/// `DELETE /product/{uuid}`
pub async fn remove(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    let public_id = parse_public_id(&uuid, "Product Not Found")?;
    ProductService::new(state.pool())
        .delete(&user, public_id)
        .await?;

    tracing::info!(product = %public_id, by = %user.public_id, "product deleted");
    Ok(Json(ApiResponse::message("Success Delete Product")))
}
