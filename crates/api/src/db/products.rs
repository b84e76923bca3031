//! Product repository for database operations.
//!
//! List and detail queries join the owning user so responses can embed the
//! owner's public identity without a second round trip.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use stockroom_core::{Email, ProductId, Role, UserId};

use super::RepositoryError;
use crate::models::product::{Product, ProductWithOwner};
use crate::models::user::PublicUser;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `PostgreSQL` product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    public_id: Uuid,
    name: String,
    price: i64,
    owner_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            public_id: row.public_id,
            name: row.name,
            price: row.price,
            owner_id: UserId::new(row.owner_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Internal row type for product queries joined with the owning user.
#[derive(Debug, sqlx::FromRow)]
struct ProductOwnerRow {
    id: i32,
    public_id: Uuid,
    name: String,
    price: i64,
    owner_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_public_id: Uuid,
    owner_name: String,
    owner_email: String,
    owner_role: Role,
}

impl ProductOwnerRow {
    fn into_product_with_owner(self) -> Result<ProductWithOwner, RepositoryError> {
        let owner_email = Email::parse(&self.owner_email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        let owner = PublicUser {
            uuid: self.owner_public_id,
            name: self.owner_name,
            email: owner_email,
            role: self.owner_role,
        };

        let product = Product {
            id: ProductId::new(self.id),
            public_id: self.public_id,
            name: self.name,
            price: self.price,
            owner_id: UserId::new(self.owner_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        };

        Ok(ProductWithOwner { product, owner })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products joined with their owners, newest first.
    ///
    /// With `owner` set, only that user's products are returned; `None`
    /// returns every product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list(
        &self,
        owner: Option<UserId>,
    ) -> Result<Vec<ProductWithOwner>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductOwnerRow>(
            r"
            SELECT p.id, p.public_id, p.name, p.price, p.owner_id,
                   p.created_at, p.updated_at,
                   u.public_id AS owner_public_id, u.name AS owner_name,
                   u.email AS owner_email, u.role AS owner_role
            FROM products p
            JOIN users u ON u.id = p.owner_id
            WHERE $1::INTEGER IS NULL OR p.owner_id = $1
            ORDER BY p.created_at DESC
            ",
        )
        .bind(owner.map(|o| o.as_i32()))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(ProductOwnerRow::into_product_with_owner)
            .collect()
    }

    /// Get a product joined with its owner, by public identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_with_owner(
        &self,
        public_id: Uuid,
    ) -> Result<Option<ProductWithOwner>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductOwnerRow>(
            r"
            SELECT p.id, p.public_id, p.name, p.price, p.owner_id,
                   p.created_at, p.updated_at,
                   u.public_id AS owner_public_id, u.name AS owner_name,
                   u.email AS owner_email, u.role AS owner_role
            FROM products p
            JOIN users u ON u.id = p.owner_id
            WHERE p.public_id = $1
            ",
        )
        .bind(public_id)
        .fetch_optional(self.pool)
        .await?;

        row.map(ProductOwnerRow::into_product_with_owner).transpose()
    }

    /// Get a product by public identifier, without the owner join.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_public_id(
        &self,
        public_id: Uuid,
    ) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, public_id, name, price, owner_id, created_at, updated_at
            FROM products
            WHERE public_id = $1
            ",
        )
        .bind(public_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Create a product owned by the given user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        name: &str,
        price: i64,
        owner: UserId,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO products (public_id, name, price, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, public_id, name, price, owner_id, created_at, updated_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(price)
        .bind(owner.as_i32())
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Overwrite a product's name and price. Callers merge unchanged values
    /// beforehand.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        public_id: Uuid,
        name: &str,
        price: i64,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            UPDATE products
            SET name = $1,
                price = $2,
                updated_at = now()
            WHERE public_id = $3
            RETURNING id, public_id, name, price, owner_id, created_at, updated_at
            ",
        )
        .bind(name)
        .bind(price)
        .bind(public_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a product by public identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, public_id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM products
            WHERE public_id = $1
            ",
        )
        .bind(public_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
