//! Session middleware configuration.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions. The expiry is
//! short and effectively fixed: nothing writes to the session after login,
//! so the deadline stays at login time plus fifteen minutes.

use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::ApiConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "stockroom_session";

/// Session expiry time in seconds (15 minutes).
const SESSION_EXPIRY_SECONDS: i64 = 15 * 60;

/// Create the session layer over a `PostgreSQL` store.
///
/// The store's session table is created by `PostgresStore::migrate`, which
/// the binary runs at startup before building this layer.
///
/// # Arguments
///
/// * `store` - Migrated `PostgreSQL` session store
/// * `config` - API configuration (for determining HTTPS mode)
#[must_use]
pub fn create_session_layer(
    store: PostgresStore,
    config: &ApiConfig,
) -> SessionManagerLayer<PostgresStore> {
    // Determine if we're in production (HTTPS)
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        // Lax so the browser client can follow cross-site navigations
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
