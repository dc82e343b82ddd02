//! Router wiring tests
//!
//! Exercise the full application stack in-process with an unconfigured
//! store: routing, the admin extractor, the response envelope, and the
//! generic 5xx bodies. No database is required.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use content_api::extractors::ADMIN_TOKEN_HEADER;
use content_api::{create_app, create_app_state};
use content_common::{
    AdminConfig, AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, MediaConfig,
    ServerConfig,
};
use serde_json::{json, Value};
use tower::ServiceExt;

const TEST_TOKEN: &str = "test-secret";

fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "content-server-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: None,
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 1,
        },
        admin: AdminConfig {
            token: Some(TEST_TOKEN.to_string()),
        },
        cors: CorsConfig::default(),
        media: MediaConfig {
            upload_url: None,
            upload_key: None,
            folder: "test".to_string(),
        },
    }
}

fn test_app() -> Router {
    create_app(create_app_state(test_config()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(ADMIN_TOKEN_HEADER, token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_health_reports_service_metadata() {
    let response = test_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("x-request-id").is_some());

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["service"], json!("content-server-test"));
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_readiness_reports_unconfigured_store() {
    let (status, body) = send(test_app(), get("/health/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], json!("not_configured"));
}

#[tokio::test]
async fn test_unknown_route_returns_enveloped_404() {
    let (status, body) = send(test_app(), get("/api/nonexistent")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("ROUTE_NOT_FOUND"));
    assert_eq!(body["message"], json!("Route not found"));
}

#[tokio::test]
async fn test_missing_token_rejected_on_write() {
    let request = json_request(Method::POST, "/api/blogs", None, &json!({ "title": "Hello" }));
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("MISSING_ADMIN_TOKEN"));
}

#[tokio::test]
async fn test_invalid_token_rejected_on_write() {
    let request = json_request(
        Method::POST,
        "/api/blogs",
        Some("wrong"),
        &json!({ "title": "Hello" }),
    );
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("INVALID_ADMIN_TOKEN"));
}

#[tokio::test]
async fn test_invalid_token_rejected_on_read() {
    let request = Request::builder()
        .uri("/api/blogs")
        .header(ADMIN_TOKEN_HEADER, "wrong")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("INVALID_ADMIN_TOKEN"));
}

#[tokio::test]
async fn test_blank_token_counts_as_missing() {
    let request = json_request(
        Method::POST,
        "/api/blogs",
        Some("   "),
        &json!({ "title": "Hello" }),
    );
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("MISSING_ADMIN_TOKEN"));
}

#[tokio::test]
async fn test_delete_without_id_is_validation_error() {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/blogs")
        .header(ADMIN_TOKEN_HEADER, TEST_TOKEN)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_update_with_malformed_id_is_validation_error() {
    let request = json_request(
        Method::PUT,
        "/api/blogs",
        Some(TEST_TOKEN),
        &json!({ "id": "not-a-uuid", "title": "Hello" }),
    );
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_store_failure_body_stays_generic() {
    let (status, body) = send(test_app(), get("/api/blogs")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!("STORE_NOT_CONFIGURED"));
    assert_eq!(body["message"], json!("Internal server error"));
}

#[tokio::test]
async fn test_options_returns_no_content() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/blogs")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_unsupported_method_rejected() {
    let request = json_request(
        Method::PATCH,
        "/api/blogs",
        Some(TEST_TOKEN),
        &json!({ "title": "Hello" }),
    );
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_media_upload_requires_admin() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/media")
        .header(
            header::CONTENT_TYPE,
            "multipart/form-data; boundary=test-boundary",
        )
        .body(Body::from("--test-boundary--\r\n"))
        .unwrap();
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("MISSING_ADMIN_TOKEN"));
}

#[tokio::test]
async fn test_media_upload_without_configured_host_fails_closed() {
    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"logo.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         pngbytes\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/media")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header(ADMIN_TOKEN_HEADER, TEST_TOKEN)
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!("CONFIG_ERROR"));
    assert_eq!(body["message"], json!("Internal server error"));
}

#[tokio::test]
async fn test_media_upload_requires_file_part() {
    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"folder\"\r\n\r\n\
         brand\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/media")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header(ADMIN_TOKEN_HEADER, TEST_TOKEN)
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("VALIDATION_ERROR"));
}
