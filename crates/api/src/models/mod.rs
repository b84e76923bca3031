//! Domain models for the stockroom API.

pub mod product;
pub mod session;
pub mod user;

pub use product::{Product, ProductPayload, ProductSummary, ProductWithOwner};
pub use session::keys as session_keys;
pub use user::{AuthedUser, PublicUser, User};
