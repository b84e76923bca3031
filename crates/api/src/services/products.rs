//! Product service.
//!
//! Every operation takes the authenticated caller and derives an
//! `AccessScope` from their role: admins reach every product, members only
//! their own. Single-record operations check existence before ownership, so
//! a missing product is always reported as not found, never as denied.

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use stockroom_core::AccessScope;

use crate::db::RepositoryError;
use crate::db::products::ProductRepository;
use crate::error::{ApiError, Result};
use crate::models::product::{Product, ProductWithOwner};
use crate::models::user::AuthedUser;

/// Bounds on product names, inclusive, counted in characters.
const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 100;

/// Create request body.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
}

/// Update request body; absent fields keep their stored values.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
}

/// Product service.
pub struct ProductService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> ProductService<'a> {
    /// Create a new product service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// List the products visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Database` if the query fails.
    pub async fn list(&self, caller: &AuthedUser) -> Result<Vec<ProductWithOwner>> {
        let scope = AccessScope::for_user(caller.role, caller.id);

        Ok(self.products.list(scope.owner_filter()).await?)
    }

    /// Get a single product visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no product matches.
    /// Returns `ApiError::AccessDenied` if it belongs to someone else and
    /// the caller is not an admin.
    pub async fn get(&self, caller: &AuthedUser, public_id: Uuid) -> Result<ProductWithOwner> {
        let found = self
            .products
            .get_with_owner(public_id)
            .await?
            .ok_or_else(product_not_found)?;

        let scope = AccessScope::for_user(caller.role, caller.id);
        if !scope.allows(found.product.owner_id) {
            return Err(ApiError::AccessDenied);
        }

        Ok(found)
    }

    /// Create a product owned by the caller.
    ///
    /// The owner always comes from the resolved session identity and is
    /// never client-supplied.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for a missing or out-of-bounds name,
    /// or a missing or negative price.
    pub async fn create(
        &self,
        caller: &AuthedUser,
        request: CreateProductRequest,
    ) -> Result<Product> {
        let name = validate_name(request.name.as_deref())?;
        let price = validate_price(request.price)?;

        Ok(self.products.create(name, price, caller.id).await?)
    }

    /// Update a product the caller may touch. Absent fields keep their
    /// stored values.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no product matches.
    /// Returns `ApiError::AccessDenied` if it belongs to someone else and
    /// the caller is not an admin.
    /// Returns `ApiError::Validation` for an out-of-bounds name or a
    /// negative price.
    pub async fn update(
        &self,
        caller: &AuthedUser,
        public_id: Uuid,
        request: UpdateProductRequest,
    ) -> Result<()> {
        let current = self.authorize(caller, public_id).await?;

        let name = match request.name.as_deref() {
            Some(name) if !name.is_empty() => validate_name(Some(name))?.to_owned(),
            _ => current.name,
        };
        let price = match request.price {
            Some(price) => validate_price(Some(price))?,
            None => current.price,
        };

        self.products
            .update(public_id, &name, price)
            .await
            .map_err(map_missing)?;

        Ok(())
    }

    /// Delete a product the caller may touch.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no product matches.
    /// Returns `ApiError::AccessDenied` if it belongs to someone else and
    /// the caller is not an admin.
    pub async fn delete(&self, caller: &AuthedUser, public_id: Uuid) -> Result<()> {
        self.authorize(caller, public_id).await?;
        self.products.delete(public_id).await.map_err(map_missing)?;

        Ok(())
    }

    /// Resolve a product and check the caller may touch it: existence first,
    /// ownership second.
    async fn authorize(&self, caller: &AuthedUser, public_id: Uuid) -> Result<Product> {
        let product = self
            .products
            .get_by_public_id(public_id)
            .await?
            .ok_or_else(product_not_found)?;

        let scope = AccessScope::for_user(caller.role, caller.id);
        if !scope.allows(product.owner_id) {
            return Err(ApiError::AccessDenied);
        }

        Ok(product)
    }
}

fn product_not_found() -> ApiError {
    ApiError::NotFound("Product Not Found".to_owned())
}

fn map_missing(e: RepositoryError) -> ApiError {
    match e {
        RepositoryError::NotFound => product_not_found(),
        other => ApiError::Database(other),
    }
}

/// Validate a product name: present, and between 3 and 100 characters.
fn validate_name(name: Option<&str>) -> Result<&str> {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::Validation("Please Input Product Name".to_owned())),
    };

    let chars = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        return Err(ApiError::Validation(
            "Product Name must be between 3 and 100 characters".to_owned(),
        ));
    }

    Ok(name)
}

/// Validate a product price: present and non-negative. Zero is a legal
/// price.
fn validate_price(price: Option<i64>) -> Result<i64> {
    let price =
        price.ok_or_else(|| ApiError::Validation("Please Input Product Price".to_owned()))?;

    if price < 0 {
        return Err(ApiError::Validation("Invalid Product Price".to_owned()));
    }

    Ok(price)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn validation_message<T: std::fmt::Debug>(result: Result<T>) -> String {
        match result.unwrap_err() {
            ApiError::Validation(message) => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_name_bounds_are_inclusive() {
        assert!(validate_name(Some("abc")).is_ok());
        assert!(validate_name(Some(&"x".repeat(100))).is_ok());

        assert_eq!(
            validation_message(validate_name(Some("ab"))),
            "Product Name must be between 3 and 100 characters"
        );
        assert_eq!(
            validation_message(validate_name(Some(&"x".repeat(101)))),
            "Product Name must be between 3 and 100 characters"
        );
    }

    #[test]
    fn test_name_bounds_count_characters_not_bytes() {
        // Three characters, six bytes
        assert!(validate_name(Some("äöü")).is_ok());
    }

    #[test]
    fn test_missing_name_is_reported() {
        assert_eq!(
            validation_message(validate_name(None)),
            "Please Input Product Name"
        );
        assert_eq!(
            validation_message(validate_name(Some(""))),
            "Please Input Product Name"
        );
    }

    #[test]
    fn test_price_zero_is_allowed() {
        assert_eq!(validate_price(Some(0)).unwrap(), 0);
        assert_eq!(validate_price(Some(1999)).unwrap(), 1999);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        assert_eq!(
            validation_message(validate_price(Some(-1))),
            "Invalid Product Price"
        );
    }

    #[test]
    fn test_missing_price_is_reported() {
        assert_eq!(
            validation_message(validate_price(None)),
            "Please Input Product Price"
        );
    }
}
