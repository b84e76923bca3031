//! User management service.
//!
//! Registration is open to anyone; listing, updating, and deleting users
//! sits behind the Admin gate at the route layer. Validation failures are
//! reported one at a time, in a fixed field order.

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use stockroom_core::{Email, Role};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::error::{ApiError, Result};
use crate::models::user::User;
use crate::services::auth::hash_password;

/// Registration request body.
///
/// Fields are optional so that missing values surface as the field-specific
/// validation messages rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Option<String>,
    pub role: Option<String>,
}

/// Update request body; absent fields keep their stored values.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Option<String>,
}

/// A registration that passed validation.
#[derive(Debug)]
struct ValidRegistration {
    name: String,
    email: Email,
    password: String,
    role: Role,
}

/// User management service.
pub struct UserService<'a> {
    users: UserRepository<'a>,
}

impl<'a> UserService<'a> {
    /// Create a new user service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// List every user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<User>> {
        Ok(self.users.list_all().await?)
    }

    /// Get a single user by public identifier.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no user matches.
    pub async fn get(&self, public_id: Uuid) -> Result<User> {
        self.users
            .get_by_public_id(public_id)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` naming the first missing or invalid
    /// field.
    /// Returns `ApiError::DuplicateEmail` if the email is taken.
    pub async fn register(&self, request: RegisterRequest) -> Result<User> {
        let valid = validate_registration(request)?;
        let password_hash = hash_password(valid.password).await?;

        self.users
            .create(&valid.name, &valid.email, valid.role, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => ApiError::DuplicateEmail,
                other => ApiError::Database(other),
            })
    }

    /// Update a user resolved by public identifier. Absent fields keep their
    /// stored values; a provided password is re-hashed from the plaintext.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no user matches.
    /// Returns `ApiError::Validation` for a malformed email, unknown role,
    /// or password confirmation mismatch.
    /// Returns `ApiError::DuplicateEmail` if the new email is taken.
    pub async fn update(&self, public_id: Uuid, request: UpdateUserRequest) -> Result<()> {
        let current = self
            .users
            .get_by_public_id(public_id)
            .await?
            .ok_or_else(user_not_found)?;

        // Merge absent fields from the stored record
        let name = match request.name {
            Some(name) if !name.is_empty() => name,
            _ => current.name,
        };
        let email = match request.email {
            Some(raw) if !raw.is_empty() => Email::parse(&raw)
                .map_err(|_| ApiError::Validation("Invalid Email Format".to_owned()))?,
            _ => current.email,
        };
        let role = match request.role {
            Some(raw) if !raw.is_empty() => raw
                .parse::<Role>()
                .map_err(|_| ApiError::Validation("Invalid Role".to_owned()))?,
            _ => current.role,
        };

        let password_hash = match password_change(
            request.password.as_deref(),
            request.confirm_password.as_deref(),
        )? {
            Some(password) => Some(hash_password(password.to_owned()).await?),
            None => None,
        };

        self.users
            .update(public_id, &name, &email, role, password_hash.as_deref())
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => ApiError::DuplicateEmail,
                RepositoryError::NotFound => user_not_found(),
                other => ApiError::Database(other),
            })?;

        Ok(())
    }

    /// Delete a user by public identifier. Their products cascade away with
    /// them.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no user matches.
    pub async fn delete(&self, public_id: Uuid) -> Result<()> {
        self.users.delete(public_id).await.map_err(|e| match e {
            RepositoryError::NotFound => user_not_found(),
            other => ApiError::Database(other),
        })
    }
}

fn user_not_found() -> ApiError {
    ApiError::NotFound("User Not Found".to_owned())
}

/// Check every registration precondition, reporting the first failure in
/// field order: name, email, password, confirmation, role.
fn validate_registration(request: RegisterRequest) -> Result<ValidRegistration> {
    let name = require(request.name, "Please Input Name")?;

    let email = require(request.email, "Please Input Email")?;
    let email = Email::parse(&email)
        .map_err(|_| ApiError::Validation("Invalid Email Format".to_owned()))?;

    let password = require(request.password, "Please Input Password")?;
    let confirm_password = require(request.confirm_password, "Please Input Confirm Password")?;
    if password != confirm_password {
        return Err(ApiError::Validation(
            "Password and Confirm Password is not same".to_owned(),
        ));
    }

    let role = require(request.role, "Please Input Role")?;
    let role = role
        .parse::<Role>()
        .map_err(|_| ApiError::Validation("Invalid Role".to_owned()))?;

    Ok(ValidRegistration {
        name,
        email,
        password,
        role,
    })
}

/// Reject absent or empty fields with the given message.
fn require(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::Validation(message.to_owned())),
    }
}

/// Decide what an update does to the password: a blank or absent value keeps
/// the stored hash, a provided one must match its confirmation.
fn password_change<'a>(
    password: Option<&'a str>,
    confirm_password: Option<&str>,
) -> Result<Option<&'a str>> {
    match password {
        None | Some("") => Ok(None),
        Some(password) => {
            if confirm_password != Some(password) {
                return Err(ApiError::Validation(
                    "Password and Confirm Password is not same".to_owned(),
                ));
            }
            Ok(Some(password))
        }
    }
}
