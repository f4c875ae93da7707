//! Typed JSON client over a pluggable transport.
//!
//! # Design
//! `NetworkClient` holds an `ApiConfig` and a `Transport` and carries no
//! mutable state between calls, so one instance can serve any number of
//! concurrent `execute` calls. Each call is split the same way every time:
//! `build_request` turns an `Endpoint` and optional body into an
//! `HttpRequest`, the transport performs the round-trip, and `parse_response`
//! turns the `HttpResponse` into the caller's type. Nothing is retried.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};

/// A client that can execute endpoints against its configured base URL.
#[async_trait]
pub trait Networking: Send + Sync {
    fn config(&self) -> &ApiConfig;

    /// Executes `endpoint`, sending `body` as JSON when present, and decodes
    /// the JSON response into `T`.
    ///
    /// A body that fails to serialize is dropped and the request is sent
    /// without one; see [`NetworkClient::build_request`].
    async fn execute<T, B>(&self, endpoint: &Endpoint, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized;

    /// Executes `endpoint` without a request body.
    async fn execute_without_body<T>(&self, endpoint: &Endpoint) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        self.execute::<T, ()>(endpoint, None).await
    }
}

/// The concrete [`Networking`] implementation.
#[derive(Debug, Clone)]
pub struct NetworkClient<Tr = ReqwestTransport> {
    config: ApiConfig,
    transport: Tr,
}

impl NetworkClient<ReqwestTransport> {
    /// A client using reqwest with its default settings.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<Tr: Transport> NetworkClient<Tr> {
    pub fn with_transport(config: ApiConfig, transport: Tr) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &Tr {
        &self.transport
    }

    /// Resolves the endpoint against the base URL and assembles the request.
    ///
    /// Fails only with `ApiError::BadUrl`. A body that cannot be serialized is
    /// logged and left off the request instead of failing the call.
    pub fn build_request<B>(&self, endpoint: &Endpoint, body: Option<&B>) -> Result<HttpRequest, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = resolve_url(self.config.base_url(), endpoint.path())?;
        let body = body.and_then(|body| match serde_json::to_vec(body) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                warn!(
                    path = endpoint.path(),
                    error = %err,
                    "request body failed to serialize, sending without body"
                );
                None
            }
        });

        Ok(HttpRequest {
            method: endpoint.method(),
            url: url.into(),
            headers: endpoint.headers(),
            body,
        })
    }
}

#[async_trait]
impl<Tr: Transport> Networking for NetworkClient<Tr> {
    fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn execute<T, B>(&self, endpoint: &Endpoint, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized,
    {
        let request = self.build_request(endpoint, body)?;
        debug!(method = %request.method, url = %request.url, "sending request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(TransportError::MalformedResponse(reason)) => {
                debug!(%reason, "transport returned a non-HTTP response");
                return Err(ApiError::BadServerResponse);
            }
            Err(err) => {
                debug!(error = %err, "transport failed");
                return Err(ApiError::NetworkError(err));
            }
        };
        debug!(
            status = response.status,
            content_type = response.header("content-type").unwrap_or("-"),
            bytes = response.body.len(),
            "received response"
        );

        parse_response(response)
    }
}

/// Checks the status and decodes the body of a transport response.
pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    let status =
        reqwest::StatusCode::from_u16(response.status).map_err(|_| ApiError::BadServerResponse)?;
    if !status.is_success() {
        return Err(ApiError::InvalidStatusCode {
            status_code: status.as_u16(),
        });
    }
    serde_json::from_slice(&response.body).map_err(ApiError::Parsing)
}

/// Appends `path` to `base_url` as path components.
///
/// Empty components are skipped, so `"users"` and `"/users"` resolve alike and
/// a trailing slash on the base URL does not produce `//`. Characters that are
/// not valid inside a path component, including `?` and `#`, are
/// percent-encoded. A trailing slash on `path` is kept.
///
/// `.` and `..` components are rejected with `ApiError::BadUrl`: URL
/// normalization would otherwise drop or collapse them, and even a
/// percent-encoded `%2E%2E` is treated as `..` by URL parsers.
pub fn resolve_url(base_url: &str, path: &str) -> Result<Url, ApiError> {
    let components: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if components.iter().any(|c| *c == "." || *c == "..") {
        return Err(ApiError::BadUrl);
    }

    let mut url = Url::parse(base_url).map_err(|_| ApiError::BadUrl)?;
    {
        let mut segments = url.path_segments_mut().map_err(|_| ApiError::BadUrl)?;
        if !components.is_empty() {
            segments.pop_if_empty().extend(&components);
            if path.ends_with('/') {
                segments.push("");
            }
        }
    }
    Ok(url)
}
