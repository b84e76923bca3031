//! Shared helpers for the Stockroom end-to-end tests.
//!
//! # Running Tests
//!
//! ```bash
//! # Apply migrations to the test database
//! cargo run -p stockroom-cli -- migrate
//!
//! # Start the API server
//! cargo run -p stockroom-api
//!
//! # Run the end-to-end suite
//! cargo test -p stockroom-integration-tests -- --ignored
//! ```
//!
//! Every test bootstraps its own accounts through the open `POST /user`
//! route, so the suite can run repeatedly against the same database without
//! manual cleanup.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Password used for every bootstrapped test account.
pub const TEST_PASSWORD: &str = "sup3r-secret-pw";

/// Base URL for the API server (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("STOCKROOM_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Client with a cookie store, so the session cookie set by `/login` rides
/// along on subsequent requests.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Email address that will not collide with earlier test runs.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", Uuid::new_v4())
}

/// Register an account through `POST /user` and return its `uuid`.
///
/// The account uses [`TEST_PASSWORD`].
///
/// # Panics
///
/// Panics if the request fails or the API rejects the registration.
pub async fn register(client: &Client, name: &str, email: &str, role: &str) -> String {
    let base_url = api_base_url();
    let resp = client
        .post(format!("{base_url}/user"))
        .json(&json!({
            "name": name,
            "email": email,
            "password": TEST_PASSWORD,
            "confirmPassword": TEST_PASSWORD,
            "role": role,
        }))
        .send()
        .await
        .expect("Failed to send register request");

    assert_eq!(
        resp.status(),
        StatusCode::CREATED,
        "registration failed for {email}"
    );
    let body: Value = resp.json().await.expect("Failed to parse register response");
    data_str(&body, "uuid").to_string()
}

/// Log in, keeping the session cookie on the client.
///
/// # Panics
///
/// Panics if the request fails or the credentials are rejected.
pub async fn login(client: &Client, email: &str, password: &str) {
    let base_url = api_base_url();
    let resp = client
        .post(format!("{base_url}/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(resp.status(), StatusCode::OK, "login failed for {email}");
}

/// Register a fresh account with the given role and log it in.
///
/// Returns the logged-in client together with the account's `uuid` and email.
///
/// # Panics
///
/// Panics if registration or login fails.
pub async fn authenticated_client(role: &str) -> (Client, String, String) {
    let client = session_client();
    let email = unique_email(&role.to_lowercase());
    let uuid = register(&client, "Test User", &email, role).await;
    login(&client, &email, TEST_PASSWORD).await;
    (client, uuid, email)
}

/// Create a product owned by the logged-in account and return its `uuid`.
///
/// # Panics
///
/// Panics if the request fails or the API rejects the product.
pub async fn create_product(client: &Client, name: &str, price: i64) -> String {
    let base_url = api_base_url();
    let resp = client
        .post(format!("{base_url}/product"))
        .json(&json!({ "name": name, "price": price }))
        .send()
        .await
        .expect("Failed to send create product request");

    assert_eq!(
        resp.status(),
        StatusCode::CREATED,
        "product creation failed for {name}"
    );
    let body: Value = resp.json().await.expect("Failed to parse product response");
    data_str(&body, "uuid").to_string()
}

/// The `message` field of a response envelope.
///
/// # Panics
///
/// Panics if the body has no string `message` field.
#[must_use]
pub fn message(body: &Value) -> &str {
    body.get("message")
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("response body missing message: {body}"))
}

/// The `data` field of a response envelope.
///
/// # Panics
///
/// Panics if the body has no `data` field.
#[must_use]
pub fn data(body: &Value) -> &Value {
    body.get("data")
        .unwrap_or_else(|| panic!("response body missing data: {body}"))
}

/// A string field inside the `data` object of a response envelope.
///
/// # Panics
///
/// Panics if the field is missing or not a string.
#[must_use]
pub fn data_str<'a>(body: &'a Value, field: &str) -> &'a str {
    data(body)
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("response body missing data.{field}: {body}"))
}
