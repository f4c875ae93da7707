//! Typed JSON-over-HTTP client.
//!
//! # Overview
//! Describe a request with an [`Endpoint`], point an [`ApiConfig`] at a base
//! URL, and let [`NetworkClient::execute`](Networking::execute) serialize the
//! body, perform the call and decode the response into your type.
//!
//! ```no_run
//! use network_kit::{ApiConfig, Endpoint, NetworkClient, Networking};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct User {
//!     name: String,
//! }
//!
//! # async fn example() -> Result<(), network_kit::ApiError> {
//! let client = NetworkClient::new(ApiConfig::new("https://api.example.com"));
//! let users: Vec<User> = client.execute_without_body(&Endpoint::get("users")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Design
//! - `NetworkClient` is stateless: it holds only its config and transport.
//! - The network sits behind the [`Transport`] trait. [`ReqwestTransport`] is
//!   the default; tests substitute scripted transports.
//! - Every failure maps to exactly one [`ApiError`] variant. Nothing is retried.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod transport;

pub use client::{NetworkClient, Networking};
pub use config::ApiConfig;
pub use endpoint::Endpoint;
pub use error::{ApiError, TransportError};
pub use http::{Headers, HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
