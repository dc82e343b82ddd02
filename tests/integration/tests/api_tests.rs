//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, ADMIN_TOKEN
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    admin_token, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Admin Gate Tests
// ============================================================================

#[tokio::test]
async fn test_create_without_token_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/blogs", &blog_payload()).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(body.error, "MISSING_ADMIN_TOKEN");
}

#[tokio::test]
async fn test_create_with_wrong_token_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_admin("/api/blogs", "definitely-wrong", &blog_payload())
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(body.error, "INVALID_ADMIN_TOKEN");
}

#[tokio::test]
async fn test_wrong_token_rejected_on_read() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_admin("/api/blogs", "definitely-wrong")
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(body.error, "INVALID_ADMIN_TOKEN");
}

// ============================================================================
// Blog CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_fetch_blog() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token();
    let payload = blog_payload();

    // Create
    let response = server.post_admin("/api/blogs", &token, &payload).await.unwrap();
    let created: CreatedEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!created.id.is_empty());

    // Fetch by id, no credentials needed for a published post
    let response = server
        .get(&format!("/api/blogs?id={}", created.id))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["blog"]["id"], json!(created.id));
    assert_eq!(body["blog"]["title"], payload["title"]);
    assert_eq!(body["blog"]["status"], json!("published"));

    // Cleanup
    let response = server
        .delete_admin(&format!("/api/blogs?id={}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_fetch_blog_by_slug() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token();
    let payload = blog_payload();

    let response = server.post_admin("/api/blogs", &token, &payload).await.unwrap();
    let created: CreatedEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Fixture titles are alphanumeric words, so the derived slug is just
    // the lowercased title with hyphens
    let title = payload["title"].as_str().unwrap();
    let slug = title.to_lowercase().replace(' ', "-");

    let response = server.get(&format!("/api/blogs?slug={slug}")).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["blog"]["slug"], json!(slug));
    assert_eq!(body["blog"]["id"], json!(created.id));

    server
        .delete_admin(&format!("/api/blogs?id={}", created.id), &token)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_duplicate_slug_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token();

    let slug = format!("shared-slug-{}", unique_suffix());
    let mut first = blog_payload();
    first["slug"] = json!(slug);
    let mut second = blog_payload();
    second["slug"] = json!(slug);

    let response = server.post_admin("/api/blogs", &token, &first).await.unwrap();
    let created: CreatedEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.post_admin("/api/blogs", &token, &second).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error, "SLUG_TAKEN");

    server
        .delete_admin(&format!("/api/blogs?id={}", created.id), &token)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_blog_merges_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token();
    let payload = blog_payload();

    let response = server.post_admin("/api/blogs", &token, &payload).await.unwrap();
    let created: CreatedEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Update only the read time; everything else must survive
    let update = json!({ "id": created.id, "readTime": "9 min" });
    let response = server.put_admin("/api/blogs", &token, &update).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["blog"]["readTime"], json!("9 min"));
    assert_eq!(body["blog"]["title"], payload["title"]);
    assert_eq!(body["blog"]["excerpt"], payload["excerpt"]);

    server
        .delete_admin(&format!("/api/blogs?id={}", created.id), &token)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_blog() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token();

    let response = server
        .post_admin("/api/blogs", &token, &blog_payload())
        .await
        .unwrap();
    let created: CreatedEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_admin(&format!("/api/blogs?id={}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Verify deleted
    let response = server
        .get_admin(&format!("/api/blogs?id={}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_requires_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token();

    let response = server.delete_admin("/api/blogs", &token).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "VALIDATION_ERROR");
}

// ============================================================================
// Visibility Tests
// ============================================================================

#[tokio::test]
async fn test_draft_hidden_from_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token();

    let response = server
        .post_admin("/api/blogs", &token, &draft_blog_payload())
        .await
        .unwrap();
    let created: CreatedEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Public fetch by id sees nothing
    let response = server
        .get(&format!("/api/blogs?id={}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Admin fetch sees the draft
    let response = server
        .get_admin(&format!("/api/blogs?id={}", created.id), &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["blog"]["status"], json!("draft"));

    // Public list excludes it; the admin drafts view includes it
    let response = server.get("/api/blogs").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<&str> = body["blogs"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["id"].as_str())
        .collect();
    assert!(!ids.contains(&created.id.as_str()));

    let response = server
        .get_admin("/api/blogs?drafts=true", &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<&str> = body["blogs"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["id"].as_str())
        .collect();
    assert!(ids.contains(&created.id.as_str()));

    server
        .delete_admin(&format!("/api/blogs?id={}", created.id), &token)
        .await
        .unwrap();
}

// ============================================================================
// Sanitization Tests
// ============================================================================

#[tokio::test]
async fn test_create_validates_required_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token();

    let response = server
        .post_admin("/api/reviews", &token, &json!({ "role": "CEO" }))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_fields_dropped() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token();

    let mut payload = team_payload();
    payload["salary"] = json!("confidential");

    let response = server.post_admin("/api/team", &token, &payload).await.unwrap();
    let created: CreatedEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_admin(&format!("/api/team?id={}", created.id), &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["teamMember"]["name"], payload["name"]);
    assert!(body["teamMember"].get("salary").is_none());

    server
        .delete_admin(&format!("/api/team?id={}", created.id), &token)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_review_rating_clamped() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token();

    let mut payload = review_payload(0);
    payload["rating"] = json!(99);

    let response = server
        .post_admin("/api/reviews", &token, &payload)
        .await
        .unwrap();
    let created: CreatedEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_admin(&format!("/api/reviews?id={}", created.id), &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["review"]["rating"], json!(5));

    server
        .delete_admin(&format!("/api/reviews?id={}", created.id), &token)
        .await
        .unwrap();
}

// ============================================================================
// Settings Tests
// ============================================================================

#[tokio::test]
async fn test_settings_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token();
    let payload = settings_payload();

    let response = server.put_admin("/api/settings", &token, &payload).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["settings"]["siteTitle"], payload["siteTitle"]);

    // Settings are public to read
    let response = server.get("/api/settings").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["settings"]["siteTitle"], payload["siteTitle"]);
}

#[tokio::test]
async fn test_settings_update_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let url = format!("{}/api/settings", server.base_url());
    let response = server
        .client
        .put(&url)
        .json(&settings_payload())
        .send()
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(body.error, "MISSING_ADMIN_TOKEN");
}

// ============================================================================
// Routing Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_route_enveloped() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/nonexistent").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error, "ROUTE_NOT_FOUND");
}
