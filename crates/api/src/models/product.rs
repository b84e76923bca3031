//! Product domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use stockroom_core::{ProductId, UserId};

use super::user::PublicUser;

/// A product record.
#[derive(Debug, Clone)]
pub struct Product {
    /// Internal surrogate key.
    pub id: ProductId,
    /// External identifier; the only id the API ever exposes.
    pub public_id: Uuid,
    /// Product name, 3 to 100 characters.
    pub name: String,
    /// Price in the smallest currency unit, never negative.
    pub price: i64,
    /// Surrogate id of the owning user.
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product joined with its owner's public identity.
#[derive(Debug, Clone)]
pub struct ProductWithOwner {
    pub product: Product,
    pub owner: PublicUser,
}

/// Payload for product list and detail responses.
#[derive(Debug, Serialize)]
pub struct ProductPayload {
    pub uuid: Uuid,
    pub name: String,
    pub price: i64,
    /// The owning user's public identity.
    pub user: PublicUser,
}

impl From<ProductWithOwner> for ProductPayload {
    fn from(found: ProductWithOwner) -> Self {
        Self {
            uuid: found.product.public_id,
            name: found.product.name,
            price: found.product.price,
            user: found.owner,
        }
    }
}

/// Payload for product create responses, before any owner join.
#[derive(Debug, Serialize)]
pub struct ProductSummary {
    pub uuid: Uuid,
    pub name: String,
    pub price: i64,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            uuid: product.public_id,
            name: product.name,
            price: product.price,
        }
    }
}
