//! End-to-end tests for product CRUD and ownership scoping.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p stockroom-api)
//!
//! Run with: cargo test -p stockroom-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use stockroom_integration_tests::{
    api_base_url, authenticated_client, create_product, data, data_str, message, session_client,
};
use uuid::Uuid;

// ============================================================================
// Ownership Scoping Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running API server and PostgreSQL"]
async fn test_member_sees_only_their_own_products() {
    let (alice, alice_uuid, _email) = authenticated_client("Member").await;
    let (bob, _uuid, _bob_email) = authenticated_client("Member").await;
    let base_url = api_base_url();

    let alice_product = create_product(&alice, "Alice Lamp", 2500).await;
    let bob_product = create_product(&bob, "Bob Chair", 9900).await;

    let resp = alice
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to list products");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse list response");
    assert_eq!(message(&body), "Success Get All Product");

    let products = data(&body).as_array().expect("data should be an array");
    let uuids: Vec<&str> = products
        .iter()
        .filter_map(|product| product.get("uuid").and_then(Value::as_str))
        .collect();
    assert!(uuids.contains(&alice_product.as_str()));
    assert!(!uuids.contains(&bob_product.as_str()));

    // Every listed product belongs to the requesting member
    for product in products {
        assert_eq!(
            product
                .get("user")
                .and_then(|user| user.get("uuid"))
                .and_then(Value::as_str),
            Some(alice_uuid.as_str())
        );
    }
}

#[tokio::test]
#[ignore = "Requires a running API server and PostgreSQL"]
async fn test_admin_list_spans_all_owners() {
    let (member, _uuid, _email) = authenticated_client("Member").await;
    let (admin, _admin_uuid, _admin_email) = authenticated_client("Admin").await;
    let base_url = api_base_url();

    let member_product = create_product(&member, "Member Desk", 12000).await;
    let admin_product = create_product(&admin, "Admin Shelf", 8000).await;

    let resp = admin
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to list products");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse list response");
    let products = data(&body).as_array().expect("data should be an array");
    let uuids: Vec<&str> = products
        .iter()
        .filter_map(|product| product.get("uuid").and_then(Value::as_str))
        .collect();
    assert!(uuids.contains(&member_product.as_str()));
    assert!(uuids.contains(&admin_product.as_str()));
}

#[tokio::test]
#[ignore = "Requires a running API server and PostgreSQL"]
async fn test_member_cannot_touch_anothers_product() {
    let (alice, _alice_uuid, _alice_email) = authenticated_client("Member").await;
    let (bob, _bob_uuid, _bob_email) = authenticated_client("Member").await;
    let base_url = api_base_url();

    let product = create_product(&alice, "Private Stock", 500).await;

    let resp = bob
        .get(format!("{base_url}/product/{product}"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(message(&body), "Access Denied");

    let resp = bob
        .put(format!("{base_url}/product/{product}"))
        .json(&json!({ "name": "Hijacked", "price": 1 }))
        .send()
        .await
        .expect("Failed to update product");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = bob
        .delete(format!("{base_url}/product/{product}"))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // The product is untouched for its owner
    let resp = alice
        .get(format!("{base_url}/product/{product}"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(data_str(&body, "name"), "Private Stock");
}

#[tokio::test]
#[ignore = "Requires a running API server and PostgreSQL"]
async fn test_admin_manages_any_product() {
    let (member, _uuid, _email) = authenticated_client("Member").await;
    let (admin, _admin_uuid, _admin_email) = authenticated_client("Admin").await;
    let base_url = api_base_url();

    let product = create_product(&member, "Member Stock", 700).await;

    let resp = admin
        .get(format!("{base_url}/product/{product}"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse get response");
    assert_eq!(message(&body), "Success Get Product By ID");

    let resp = admin
        .put(format!("{base_url}/product/{product}"))
        .json(&json!({ "price": 1400 }))
        .send()
        .await
        .expect("Failed to update product");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse update response");
    assert_eq!(message(&body), "Success Update Product");

    // The price change is visible to the owner
    let resp = member
        .get(format!("{base_url}/product/{product}"))
        .send()
        .await
        .expect("Failed to get product");
    let body: Value = resp.json().await.expect("Failed to parse get response");
    assert_eq!(
        data(&body).get("price").and_then(Value::as_i64),
        Some(1400)
    );
    assert_eq!(data_str(&body, "name"), "Member Stock");

    let resp = admin
        .delete(format!("{base_url}/product/{product}"))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse delete response");
    assert_eq!(message(&body), "Success Delete Product");

    // Gone for the owner too
    let resp = member
        .get(format!("{base_url}/product/{product}"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Missing Product Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running API server and PostgreSQL"]
async fn test_missing_product_is_not_found() {
    let (member, _uuid, _email) = authenticated_client("Member").await;
    let (admin, _admin_uuid, _admin_email) = authenticated_client("Admin").await;
    let base_url = api_base_url();
    let ghost = Uuid::new_v4();

    // Missing products are 404 for every role; the existence check runs
    // before any ownership decision
    for client in [&member, &admin] {
        let resp = client
            .get(format!("{base_url}/product/{ghost}"))
            .send()
            .await
            .expect("Failed to get product");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = resp.json().await.expect("Failed to parse response");
        assert_eq!(message(&body), "Product Not Found");
    }

    let resp = member
        .put(format!("{base_url}/product/{ghost}"))
        .json(&json!({ "price": 100 }))
        .send()
        .await
        .expect("Failed to update product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = member
        .delete(format!("{base_url}/product/{ghost}"))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Identifiers that are not UUIDs behave like missing products
    let resp = member
        .get(format!("{base_url}/product/definitely-not-a-uuid"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(message(&body), "Product Not Found");
}

#[tokio::test]
#[ignore = "Requires a running API server and PostgreSQL"]
async fn test_products_require_login() {
    let client = session_client();
    let base_url = api_base_url();

    let resp = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to list products");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(message(&body), "Please Login to Your Account");
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running API server and PostgreSQL"]
async fn test_create_product_validation() {
    let (member, _uuid, _email) = authenticated_client("Member").await;
    let base_url = api_base_url();

    let resp = member
        .post(format!("{base_url}/product"))
        .json(&json!({ "price": 100 }))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(message(&body), "Please Input Product Name");

    let resp = member
        .post(format!("{base_url}/product"))
        .json(&json!({ "name": "ab", "price": 100 }))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(
        message(&body),
        "Product Name must be between 3 and 100 characters"
    );

    let resp = member
        .post(format!("{base_url}/product"))
        .json(&json!({ "name": "Valid Name" }))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(message(&body), "Please Input Product Price");

    let resp = member
        .post(format!("{base_url}/product"))
        .json(&json!({ "name": "Valid Name", "price": -5 }))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(message(&body), "Invalid Product Price");

    // Zero is a legal price
    let resp = member
        .post(format!("{base_url}/product"))
        .json(&json!({ "name": "Free Sample", "price": 0 }))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
#[ignore = "Requires a running API server and PostgreSQL"]
async fn test_update_product_validation() {
    let (member, _uuid, _email) = authenticated_client("Member").await;
    let base_url = api_base_url();

    let product = create_product(&member, "Stable Name", 300).await;

    // Present fields are re-validated on update
    let resp = member
        .put(format!("{base_url}/product/{product}"))
        .json(&json!({ "name": "ab" }))
        .send()
        .await
        .expect("Failed to update product");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(
        message(&body),
        "Product Name must be between 3 and 100 characters"
    );

    let resp = member
        .put(format!("{base_url}/product/{product}"))
        .json(&json!({ "price": -1 }))
        .send()
        .await
        .expect("Failed to update product");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(message(&body), "Invalid Product Price");

    // Absent fields keep their stored values
    let resp = member
        .put(format!("{base_url}/product/{product}"))
        .json(&json!({ "price": 450 }))
        .send()
        .await
        .expect("Failed to update product");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = member
        .get(format!("{base_url}/product/{product}"))
        .send()
        .await
        .expect("Failed to get product");
    let body: Value = resp.json().await.expect("Failed to parse get response");
    assert_eq!(data_str(&body, "name"), "Stable Name");
    assert_eq!(data(&body).get("price").and_then(Value::as_i64), Some(450));
}

// ============================================================================
// Payload Shape Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running API server and PostgreSQL"]
async fn test_product_embeds_owner_identity() {
    let (member, member_uuid, member_email) = authenticated_client("Member").await;
    let base_url = api_base_url();

    let product = create_product(&member, "Owned Widget", 4200).await;

    let resp = member
        .get(format!("{base_url}/product/{product}"))
        .send()
        .await
        .expect("Failed to get product");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse get response");

    let owner = data(&body)
        .get("user")
        .expect("product payload should embed its owner");
    assert_eq!(
        owner.get("uuid").and_then(Value::as_str),
        Some(member_uuid.as_str())
    );
    assert_eq!(
        owner.get("email").and_then(Value::as_str),
        Some(member_email.as_str())
    );

    // Internal numeric ids stay internal
    assert!(owner.get("id").is_none());
    assert!(data(&body).get("owner_id").is_none());
}
