//! Integration tests for the connect handshake.
//!
//! These tests verify server verification, API version checking, and
//! credential resolution against a mocked server.

use inventree_client::{
    ApiClient, ClientConfig, ConnectError, Credentials, FilterSet, HostUrl, Model, Part, Secret,
    MIN_SUPPORTED_API_VERSION,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a healthy API root for the given server.
async fn mount_server_info(server: &MockServer, api_version: u32) {
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "server": "InvenTree",
            "version": "0.14.0",
            "apiVersion": api_version
        })))
        .mount(server)
        .await;
}

fn token_config(server: &MockServer, token: &str) -> ClientConfig {
    ClientConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .credentials(Credentials::token(Secret::new(token).unwrap()))
        .build()
        .unwrap()
}

fn basic_config(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .credentials(Credentials::basic("reader", Secret::new("hunter2").unwrap()).unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_connect_with_token_verifies_against_user_me() {
    let server = MockServer::start().await;
    mount_server_info(&server, 250).await;

    Mock::given(method("GET"))
        .and(path("/api/user/me/"))
        .and(header("Authorization", "Token test-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"pk": 1, "username": "reader"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::connect(&token_config(&server, "test-token"))
        .await
        .unwrap();

    assert_eq!(client.session().server_name(), "InvenTree");
    assert_eq!(client.session().api_version(), 250);
}

#[tokio::test]
async fn test_connect_with_basic_credentials_requests_token() {
    let server = MockServer::start().await;
    mount_server_info(&server, 250).await;

    Mock::given(method("GET"))
        .and(path("/api/user/token/"))
        .and(query_param("name", "inventree-client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "issued-token"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::connect(&basic_config(&server)).await.unwrap();

    // Subsequent requests must carry the issued token, not the password
    Mock::given(method("GET"))
        .and(path("/api/part/"))
        .and(header("Authorization", "Token issued-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let parts = Part::list(&client, FilterSet::new()).await.unwrap();
    assert!(parts.is_empty());
}

#[tokio::test]
async fn test_connect_sends_configured_token_name() {
    let server = MockServer::start().await;
    mount_server_info(&server, 250).await;

    Mock::given(method("GET"))
        .and(path("/api/user/token/"))
        .and(query_param("name", "warehouse-sync"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "issued-token"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .credentials(Credentials::basic("reader", Secret::new("hunter2").unwrap()).unwrap())
        .token_name("warehouse-sync")
        .build()
        .unwrap();

    assert!(ApiClient::connect(&config).await.is_ok());
}

#[tokio::test]
async fn test_connect_fails_with_rejected_token() {
    let server = MockServer::start().await;
    mount_server_info(&server, 250).await;

    Mock::given(method("GET"))
        .and(path("/api/user/me/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Invalid token."})),
        )
        .mount(&server)
        .await;

    let error = ApiClient::connect(&token_config(&server, "bad-token"))
        .await
        .unwrap_err();

    assert!(matches!(error, ConnectError::Auth { status: 401 }));
}

#[tokio::test]
async fn test_connect_fails_with_rejected_password() {
    let server = MockServer::start().await;
    mount_server_info(&server, 250).await;

    Mock::given(method("GET"))
        .and(path("/api/user/token/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Invalid username/password."})),
        )
        .mount(&server)
        .await;

    let error = ApiClient::connect(&basic_config(&server)).await.unwrap_err();

    assert!(matches!(error, ConnectError::Auth { status: 401 }));
}

#[tokio::test]
async fn test_connect_rejects_outdated_server() {
    let server = MockServer::start().await;
    mount_server_info(&server, 100).await;

    let error = ApiClient::connect(&token_config(&server, "test-token"))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ConnectError::UnsupportedApiVersion {
            server: 100,
            required: MIN_SUPPORTED_API_VERSION,
        }
    ));
}

#[tokio::test]
async fn test_connect_fails_on_unreachable_host() {
    // Port 1 is reserved and closed; the connection is refused immediately
    let config = ClientConfig::builder()
        .host(HostUrl::new("http://127.0.0.1:1").unwrap())
        .credentials(Credentials::token(Secret::new("test-token").unwrap()))
        .build()
        .unwrap();

    let error = ApiClient::connect(&config).await.unwrap_err();

    assert!(matches!(error, ConnectError::Connection(_)));
}

#[tokio::test]
async fn test_connect_rejects_non_json_api_root() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not an api</html>"))
        .mount(&server)
        .await;

    let error = ApiClient::connect(&token_config(&server, "test-token"))
        .await
        .unwrap_err();

    assert!(matches!(error, ConnectError::UnexpectedResponse { .. }));
}

#[tokio::test]
async fn test_connect_rejects_api_root_without_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"server": "InvenTree"})))
        .mount(&server)
        .await;

    let error = ApiClient::connect(&token_config(&server, "test-token"))
        .await
        .unwrap_err();

    assert!(matches!(error, ConnectError::UnexpectedResponse { .. }));
}

#[tokio::test]
async fn test_connect_fails_when_token_endpoint_returns_no_token() {
    let server = MockServer::start().await;
    mount_server_info(&server, 250).await;

    Mock::given(method("GET"))
        .and(path("/api/user/token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let error = ApiClient::connect(&basic_config(&server)).await.unwrap_err();

    assert!(matches!(error, ConnectError::UnexpectedResponse { .. }));
}
