//! Contract tests for GhostHttpClient against the Ghost Admin API.
//!
//! These tests use wiremock to stand in for a Ghost site. Paths, headers,
//! request shapes and response shapes follow the Admin API v5.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | POST   | `/ghost/api/admin/images/upload/` | `upload_*` |
//! | POST   | `/ghost/api/admin/posts/?source=html` | `create_post_*` |

use md2ghost::{
    AdminApiKey, AdminClaims, AppError, DraftPost, GhostErrorCode, GhostHttpClient,
    ImageUploader, PostMetadata, PostPublisher, UploadError, ValidatedUrl,
};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use std::path::Path;
use wiremock::matchers::{
    body_json, body_string_contains, header, header_regex, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY_ID: &str = "6512f0c2a1b2c3d4e5f60718";
const KEY_SECRET: &str = "5a1c0f3e9b7d2a4c6e8f0a1b3c5d7e9f5a1c0f3e9b7d2a4c6e8f0a1b3c5d7e9f";

/// `Ghost <header>.<claims>.<signature>`
const SIGNED_TOKEN: &str = r"^Ghost [A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$";

fn admin_key() -> AdminApiKey {
    AdminApiKey::new(format!("{}:{}", KEY_ID, KEY_SECRET)).unwrap()
}

/// Build a GhostHttpClient pointed at a wiremock server.
fn test_client(mock_server: &MockServer, repo_root: &Path) -> GhostHttpClient {
    GhostHttpClient::new(
        ValidatedUrl::parse(&mock_server.uri()).unwrap(),
        &admin_key(),
        repo_root,
    )
    .unwrap()
}

fn checkout_with_image(rel: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join(rel);
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(file, "not really a png").unwrap();
    dir
}

fn draft(metadata: serde_json::Value) -> DraftPost {
    DraftPost::new(
        PostMetadata::try_from(metadata).unwrap(),
        "<p>Hello</p>\n".to_string(),
    )
}

// ── POST /ghost/api/admin/images/upload/ ─────────────────────────────

#[tokio::test]
async fn upload_sends_multipart_file_and_returns_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ghost/api/admin/images/upload/"))
        .and(header_regex("Authorization", SIGNED_TOKEN))
        .and(header("Accept-Version", "v5.0"))
        .and(body_string_contains("filename=\"a.png\""))
        .and(body_string_contains("image/png"))
        .and(body_string_contains("not really a png"))
        .and(body_string_contains("posts/my-post/img/a.png"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "images": [{
                "url": "https://blog.example/content/images/2026/10/a.png",
                "ref": "posts/my-post/img/a.png"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let checkout = checkout_with_image("posts/my-post/img/a.png");
    let client = test_client(&mock_server, checkout.path());

    let url = client.upload("posts/my-post/img/a.png").await.unwrap();
    assert_eq!(url, "https://blog.example/content/images/2026/10/a.png");
}

#[tokio::test]
async fn upload_handles_413_as_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ghost/api/admin/images/upload/"))
        .respond_with(ResponseTemplate::new(413).set_body_json(json!({
            "errors": [{
                "message": "Request is larger than the maximum file size the server allows",
                "type": "RequestEntityTooLargeError"
            }]
        })))
        .mount(&mock_server)
        .await;

    let checkout = checkout_with_image("big.png");
    let client = test_client(&mock_server, checkout.path());

    let err = client.upload("big.png").await.unwrap_err();
    match err {
        UploadError::Rejected { code, status, .. } => {
            assert_eq!(code, "RequestEntityTooLargeError");
            assert_eq!(status, 413);
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn upload_without_image_in_response_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ghost/api/admin/images/upload/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "images": [] })))
        .mount(&mock_server)
        .await;

    let checkout = checkout_with_image("a.png");
    let client = test_client(&mock_server, checkout.path());

    let err = client.upload("a.png").await.unwrap_err();
    assert!(matches!(err, UploadError::MalformedResponse { .. }));
}

#[tokio::test]
async fn upload_of_missing_file_never_reaches_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let checkout = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, checkout.path());

    let err = client.upload("missing.png").await.unwrap_err();
    assert_eq!(
        err,
        UploadError::FileNotFound {
            path: "missing.png".to_string()
        }
    );
}

#[tokio::test]
async fn upload_to_unreachable_site_reports_the_cause() {
    let checkout = checkout_with_image("a.png");
    // Nothing listens on the discard port.
    let client = GhostHttpClient::new(
        ValidatedUrl::parse("http://127.0.0.1:9").unwrap(),
        &admin_key(),
        checkout.path(),
    )
    .unwrap();

    match client.upload("a.png").await.unwrap_err() {
        UploadError::Transport { message } => {
            assert!(message.contains("error sending request"), "{message}");
            assert!(
                message.to_lowercase().contains("connection refused"),
                "{message}"
            );
        }
        other => panic!("expected Transport, got {:?}", other),
    }
}

// ── Authorization ────────────────────────────────────────────────────

#[tokio::test]
async fn every_request_carries_a_token_signed_with_the_key_secret() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ghost/api/admin/posts/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "posts": [{ "id": "1", "url": "https://blog.example/p/1/" }]
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, Path::new("."));
    client.create_post(&draft(json!({}))).await.unwrap();
    client.create_post(&draft(json!({}))).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&["/admin/"]);
    let secret = hex::decode(KEY_SECRET).unwrap();

    for request in &requests {
        let value = request
            .headers
            .get("Authorization")
            .unwrap()
            .to_str()
            .unwrap();
        let token = value.strip_prefix("Ghost ").unwrap();

        assert_eq!(decode_header(token).unwrap().kid.as_deref(), Some(KEY_ID));
        let claims = decode::<AdminClaims>(token, &DecodingKey::from_secret(&secret), &validation)
            .unwrap()
            .claims;
        assert_eq!(claims.aud, "/admin/");
        assert!(claims.exp > claims.iat);
        assert!(!value.contains(KEY_SECRET));
    }
}

// ── POST /ghost/api/admin/posts/?source=html ─────────────────────────

#[tokio::test]
async fn create_post_sends_html_draft_and_returns_post() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ghost/api/admin/posts/"))
        .and(query_param("source", "html"))
        .and(header_regex("Authorization", SIGNED_TOKEN))
        .and(header("Accept-Version", "v5.0"))
        .and(body_json(json!({
            "posts": [{
                "title": "Hello",
                "tags": ["rust"],
                "feature_image": "https://cdn/hero.png",
                "html": "<p>Hello</p>\n",
                "status": "draft"
            }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "posts": [{
                "id": "6512f0c2a1b2c3d4e5f60718",
                "url": "https://blog.example/p/6512f0c2/",
                "status": "draft"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, Path::new("."));
    let post = client
        .create_post(&draft(json!({
            "title": "Hello",
            "tags": ["rust"],
            "feature_image": "https://cdn/hero.png",
            "status": "published"
        })))
        .await
        .unwrap();

    assert_eq!(post.id.as_deref(), Some("6512f0c2a1b2c3d4e5f60718"));
    assert_eq!(post.url, "https://blog.example/p/6512f0c2/");
}

#[tokio::test]
async fn create_post_handles_422_validation_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ghost/api/admin/posts/"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": [{
                "message": "Validation error, cannot save post.",
                "type": "ValidationError",
                "context": "Value in [posts.title] cannot be blank."
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, Path::new("."));
    let err = client.create_post(&draft(json!({}))).await.unwrap_err();

    match err {
        AppError::RemoteSubmission {
            code,
            message,
            status,
        } => {
            assert_eq!(code, GhostErrorCode::Validation);
            assert_eq!(status.as_u16(), 422);
            assert_eq!(
                message,
                "Validation error, cannot save post. (Value in [posts.title] cannot be blank.)"
            );
        }
        other => panic!("expected RemoteSubmission, got {:?}", other),
    }
}

#[tokio::test]
async fn create_post_handles_401_with_unparseable_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ghost/api/admin/posts/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, Path::new("."));
    let err = client.create_post(&draft(json!({}))).await.unwrap_err();

    match err {
        AppError::RemoteSubmission { code, .. } => {
            assert_eq!(code, GhostErrorCode::HttpStatus(401));
            assert!(code.is_auth_failure());
        }
        other => panic!("expected RemoteSubmission, got {:?}", other),
    }
}

#[tokio::test]
async fn create_post_with_non_json_success_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ghost/api/admin/posts/"))
        .respond_with(ResponseTemplate::new(201).set_body_string("<html>proxy page</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, Path::new("."));
    let err = client.create_post(&draft(json!({}))).await.unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse(_)));
}
