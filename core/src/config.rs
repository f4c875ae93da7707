//! Client configuration.

use serde::{Deserialize, Serialize};

/// Environment variable read by [`ApiConfig::from_env`].
pub const BASE_URL_ENV: &str = "NETWORK_KIT_BASE_URL";

/// Base URL that endpoint paths are resolved against.
///
/// The string is stored as given. It is only parsed when a request is
/// executed, so an invalid base URL fails each call with `ApiError::BadUrl`
/// rather than failing construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads the base URL from `NETWORK_KIT_BASE_URL`.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        std::env::var(BASE_URL_ENV).map(Self::new)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
