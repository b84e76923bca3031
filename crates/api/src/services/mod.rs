//! Business logic services for the stockroom API.
//!
//! # Services
//!
//! - `auth` - Credential checks, password hashing, session errors
//! - `users` - User registration and management
//! - `products` - Product CRUD with ownership scoping

pub mod auth;
pub mod products;
pub mod users;

pub use auth::AuthService;
pub use products::ProductService;
pub use users::UserService;
