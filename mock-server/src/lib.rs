//! Diagnostic HTTP server for exercising clients over real sockets.
//!
//! Every route answers any method. `/inspect` reports what arrived, `/echo`
//! hands the body back, and `/status` and `/malformed` produce the responses a
//! client has to reject.

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::Path,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::debug;

/// What `/inspect` saw of a request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub method: String,
    pub path: String,
    /// Keyed by lowercase header name.
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

pub fn app() -> Router {
    Router::new()
        .route("/inspect", any(inspect))
        .route("/inspect/{*rest}", any(inspect))
        .route("/echo", any(echo))
        .route("/status/{code}", any(status))
        .route("/malformed", any(malformed))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// `null` for an empty body, the parsed document for JSON, and the raw text
/// otherwise.
pub fn body_value(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

async fn inspect(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Inspection> {
    debug!(%method, path = uri.path(), bytes = body.len(), "inspect");
    Json(Inspection {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                let value = value.to_str().ok()?;
                Some((name.as_str().to_string(), value.to_string()))
            })
            .collect(),
        body: body_value(&body),
    })
}

/// Returns the request body untouched, under the request's content type.
async fn echo(headers: HeaderMap, body: Bytes) -> ([(header::HeaderName, HeaderValue); 1], Bytes) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    ([(header::CONTENT_TYPE, content_type)], body)
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Json(serde_json::json!({}))))
}

async fn malformed() -> &'static str {
    "this is not json"
}
