//! Authenticated HTTP client for the InvenTree API.
//!
//! This module provides the [`ApiClient`] type, which owns the connect
//! handshake and issues authenticated requests against the server's API root.

use std::collections::BTreeMap;

use url::Url;

use crate::auth::{Credentials, Session};
use crate::client::errors::{ConnectError, HttpError, InvalidRequestError};
use crate::client::request::{ApiRequest, HttpMethod};
use crate::client::response::HttpResponse;
use crate::config::{ClientConfig, Secret, TlsPolicy};

/// Minimum server API version this client supports.
pub const MIN_SUPPORTED_API_VERSION: u32 = 206;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// An authenticated client for an InvenTree server.
///
/// The client is created by [`ApiClient::connect`], which verifies the
/// server, checks its API version, and resolves the configured credentials
/// into an API token. After connecting, all state is read-only.
///
/// The client performs no automatic retries: a failed request surfaces
/// immediately, and the caller owns retry policy.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use inventree_client::{ApiClient, ClientConfig, Credentials, HostUrl, Secret};
///
/// let config = ClientConfig::builder()
///     .host(HostUrl::new("https://inventree.example.com")?)
///     .credentials(Credentials::basic("reader", Secret::new("hunter2")?)?)
///     .build()?;
///
/// let client = ApiClient::connect(&config).await?;
/// println!("Connected to {}", client.session().server_name());
/// ```
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    session: Session,
    user_agent: String,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Connects to the server described by `config`.
    ///
    /// The handshake:
    /// 1. Fetches the API root for server name and API version.
    /// 2. Rejects servers older than [`MIN_SUPPORTED_API_VERSION`].
    /// 3. Resolves credentials into a token: a configured token is verified
    ///    against `user/me/`; basic credentials are exchanged for a token at
    ///    `user/token/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::Connection`] if the host is unreachable or the
    /// TLS handshake fails, [`ConnectError::Auth`] on rejected credentials,
    /// [`ConnectError::UnsupportedApiVersion`] for servers that are too old,
    /// and [`ConnectError::UnexpectedResponse`] if the server does not answer
    /// the handshake with the expected payload.
    pub async fn connect(config: &ClientConfig) -> Result<Self, ConnectError> {
        let http = build_http_client(config)?;
        let api_url = config.host().api_url();

        let info = fetch_server_info(&http, &api_url).await?;
        if info.api_version < MIN_SUPPORTED_API_VERSION {
            return Err(ConnectError::UnsupportedApiVersion {
                server: info.api_version,
                required: MIN_SUPPORTED_API_VERSION,
            });
        }

        let token = resolve_token(&http, &api_url, config).await?;

        tracing::info!(
            server = %info.name,
            api_version = info.api_version,
            "Connected to InvenTree server"
        );

        Ok(Self {
            http,
            session: Session::new(api_url, token, info.name, info.api_version),
            user_agent: user_agent(),
        })
    }

    /// Returns the session established by the connect handshake.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Sends a request against the API root.
    ///
    /// The endpoint path is normalized to the server's convention: no leading
    /// slash, one trailing slash. Any HTTP status is returned as an
    /// [`HttpResponse`]; use [`HttpResponse::error_for_status`] to convert
    /// non-2xx statuses into errors.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails validation
    /// and [`HttpError::Network`] on connection failure.
    pub async fn send(&self, request: ApiRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let path = normalize_endpoint(&request.path);
        let url = join_endpoint(self.session.api_url(), &path)?;

        self.execute(request.method, url, &request.query, request.body.as_ref())
            .await
    }

    /// Sends a GET request to an endpoint with query parameters.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get(
        &self,
        path: &str,
        query: &BTreeMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        let request = ApiRequest::builder(HttpMethod::Get, path)
            .query(query.clone())
            .build()?;
        self.send(request).await
    }

    /// Sends a POST request with a JSON body to an endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = ApiRequest::builder(HttpMethod::Post, path).body(body).build()?;
        self.send(request).await
    }

    /// Sends a PATCH request with a JSON body to an endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = ApiRequest::builder(HttpMethod::Patch, path).body(body).build()?;
        self.send(request).await
    }

    /// Sends a DELETE request to an endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        let request = ApiRequest::builder(HttpMethod::Delete, path).build()?;
        self.send(request).await
    }

    /// Sends a GET request to an absolute URL.
    ///
    /// Used by pagination to follow the `next` link returned in list bodies;
    /// the link carries its own query string.
    pub(crate) async fn get_url(&self, url: Url) -> Result<HttpResponse, HttpError> {
        self.execute(HttpMethod::Get, url, &BTreeMap::new(), None)
            .await
    }

    async fn execute(
        &self,
        method: HttpMethod,
        url: Url,
        query: &BTreeMap<String, String>,
        body: Option<&serde_json::Value>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = match method {
            HttpMethod::Get => self.http.get(url.clone()),
            HttpMethod::Post => self.http.post(url.clone()),
            HttpMethod::Patch => self.http.patch(url.clone()),
            HttpMethod::Put => self.http.put(url.clone()),
            HttpMethod::Delete => self.http.delete(url.clone()),
        };

        builder = builder
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent)
            .header(
                "Authorization",
                format!("Token {}", self.session.token().expose()),
            );

        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        tracing::debug!(%method, %url, "Sending API request");

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let body = parse_body(res).await;

        let response = HttpResponse::new(code, body);
        if response.is_ok() {
            tracing::debug!(code, %url, "API request succeeded");
        } else {
            tracing::warn!(
                code,
                %url,
                detail = response.detail().unwrap_or_default(),
                "API request failed"
            );
        }

        Ok(response)
    }
}

/// The User-Agent string sent with every request.
fn user_agent() -> String {
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    format!("InvenTree Rust Client v{CLIENT_VERSION} | Rust {rust_version}")
}

/// Builds the underlying HTTP client from the configuration.
fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client, ConnectError> {
    let builder = reqwest::Client::builder().timeout(config.timeout());
    let builder = match config.tls_policy() {
        TlsPolicy::BundledRoots => builder.use_rustls_tls(),
        TlsPolicy::SystemStore => builder.use_native_tls(),
    };
    builder.build().map_err(ConnectError::Connection)
}

/// Server details reported by the API root.
struct ServerInfo {
    name: String,
    api_version: u32,
}

/// Fetches server name and API version from the API root.
async fn fetch_server_info(http: &reqwest::Client, api_url: &Url) -> Result<ServerInfo, ConnectError> {
    let res = http
        .get(api_url.clone())
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(ConnectError::Connection)?;

    let code = res.status().as_u16();
    if !(200..300).contains(&code) {
        return Err(ConnectError::UnexpectedResponse {
            detail: format!("HTTP {code} from the API root"),
        });
    }

    let info: serde_json::Value = res.json().await.map_err(|_| ConnectError::UnexpectedResponse {
        detail: "API root did not return JSON".to_string(),
    })?;

    let api_version = info
        .get("apiVersion")
        .and_then(serde_json::Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| ConnectError::UnexpectedResponse {
            detail: "API root is missing the 'apiVersion' field".to_string(),
        })?;

    let name = info
        .get("server")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(ServerInfo { name, api_version })
}

/// Resolves the configured credentials into an API token.
async fn resolve_token(
    http: &reqwest::Client,
    api_url: &Url,
    config: &ClientConfig,
) -> Result<Secret, ConnectError> {
    match config.credentials() {
        Credentials::Token(token) => {
            // Verify the token before accepting it for the session
            let url = join_endpoint(api_url, "user/me/").map_err(HttpError::from)?;
            let res = http
                .get(url)
                .header("Accept", "application/json")
                .header("Authorization", format!("Token {}", token.expose()))
                .send()
                .await
                .map_err(ConnectError::Connection)?;

            check_auth_status(res.status().as_u16())?;
            Ok(token.clone())
        }
        Credentials::Basic { username, password } => {
            let url = join_endpoint(api_url, "user/token/").map_err(HttpError::from)?;
            let res = http
                .get(url)
                .header("Accept", "application/json")
                .query(&[("name", config.token_name())])
                .basic_auth(username, Some(password.expose()))
                .send()
                .await
                .map_err(ConnectError::Connection)?;

            check_auth_status(res.status().as_u16())?;

            let body: serde_json::Value =
                res.json().await.map_err(|_| ConnectError::UnexpectedResponse {
                    detail: "Token endpoint did not return JSON".to_string(),
                })?;

            body.get("token")
                .and_then(serde_json::Value::as_str)
                .and_then(|token| Secret::new(token).ok())
                .ok_or_else(|| ConnectError::UnexpectedResponse {
                    detail: "Token endpoint did not return a token".to_string(),
                })
        }
    }
}

/// Maps an auth-check status code to a connect result.
fn check_auth_status(code: u16) -> Result<(), ConnectError> {
    match code {
        200..=299 => Ok(()),
        401 | 403 => Err(ConnectError::Auth { status: code }),
        _ => Err(ConnectError::UnexpectedResponse {
            detail: format!("HTTP {code} during authentication"),
        }),
    }
}

/// Joins an endpoint path onto the API root URL.
fn join_endpoint(base: &Url, path: &str) -> Result<Url, InvalidRequestError> {
    base.join(path).map_err(|_| InvalidRequestError::InvalidPath {
        path: path.to_string(),
    })
}

/// Normalizes an endpoint path: no leading slash, one trailing slash.
///
/// The server redirects requests without a trailing slash, so normalizing up
/// front saves a round trip.
fn normalize_endpoint(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() || trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

/// Parses a response body as JSON, tolerating empty and non-JSON bodies.
async fn parse_body(res: reqwest::Response) -> serde_json::Value {
    let text = res.text().await.unwrap_or_default();
    if text.is_empty() {
        serde_json::json!({})
    } else {
        serde_json::from_str(&text).unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
    }
}
