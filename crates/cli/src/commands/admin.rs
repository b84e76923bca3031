//! Admin user management commands.
//!
//! Registration through the API stores whatever role the request carries,
//! but a fresh deployment has no accounts at all; this command seeds the
//! first Admin directly in the database.
//!
//! # Usage
//!
//! ```bash
//! # Create an admin with a generated password (printed once)
//! stockroom-cli admin create -e admin@example.com -n "Admin Name"
//!
//! # Create an admin with a chosen password
//! stockroom-cli admin create -e admin@example.com -n "Admin Name" -p "s3cret"
//! ```
//!
//! # Environment Variables
//!
//! - `STOCKROOM_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use rand::Rng;
use rand::distr::Alphanumeric;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use stockroom_core::{Email, Role};

/// Length of generated passwords.
const GENERATED_PASSWORD_LENGTH: usize = 20;

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// User already exists.
    #[error("User already exists with email: {0}")]
    UserExists(String),

    /// Password hashing failed.
    #[error("Password hashing failed")]
    PasswordHash,
}

/// Create a new admin user.
///
/// # Arguments
///
/// * `email` - Admin's email address
/// * `name` - Admin's display name
/// * `password` - Password, or `None` to generate one and print it
///
/// # Errors
///
/// Returns an error if the email is invalid or already registered, or if a
/// database operation fails.
pub async fn create_user(
    email: &str,
    name: &str,
    password: Option<String>,
) -> Result<(), AdminError> {
    dotenvy::dotenv().ok();

    let email = Email::parse(email).map_err(|e| AdminError::InvalidEmail(e.to_string()))?;

    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Creating admin user: {}", email);

    // Check if user already exists
    let existing = sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE email = $1")
        .bind(email.as_str())
        .fetch_optional(&pool)
        .await?;

    if existing.is_some() {
        return Err(AdminError::UserExists(email.to_string()));
    }

    let (password, generated) = match password {
        Some(password) => (password, false),
        None => (generate_password(), true),
    };
    let password_hash = hash_password(&password)?;

    // Create the user
    let public_id = Uuid::new_v4();
    sqlx::query(
        r"
        INSERT INTO users (public_id, name, email, role, password_hash)
        VALUES ($1, $2, $3, $4, $5)
        ",
    )
    .bind(public_id)
    .bind(name)
    .bind(email.as_str())
    .bind(Role::Admin)
    .bind(&password_hash)
    .execute(&pool)
    .await?;

    tracing::info!("Admin user created: {}", public_id);

    #[allow(clippy::print_stdout)]
    {
        println!("Created admin {public_id} ({email})");
        if generated {
            // Shown exactly once; only the hash is stored
            println!("Generated password: {password}");
        }
    }

    Ok(())
}

fn database_url() -> Result<String, AdminError> {
    std::env::var("STOCKROOM_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| AdminError::MissingEnvVar("STOCKROOM_DATABASE_URL"))
}

/// Generate a random alphanumeric password.
fn generate_password() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(GENERATED_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AdminError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AdminError::PasswordHash)
}
