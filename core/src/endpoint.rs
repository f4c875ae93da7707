//! Endpoint descriptors: one logical request against an API.

use crate::http::{Headers, HttpMethod};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Describes a single request: a path relative to the configured base URL, a
/// method, and headers layered over the JSON default.
///
/// The path is not validated here; a path that cannot be joined onto the base
/// URL is reported as `ApiError::BadUrl` when the endpoint is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
    method: HttpMethod,
    additional_headers: Option<Headers>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, method: HttpMethod, additional_headers: Option<Headers>) -> Self {
        Self {
            path: path.into(),
            method,
            additional_headers,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path, HttpMethod::Get, None)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path, HttpMethod::Post, None)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(path, HttpMethod::Put, None)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(path, HttpMethod::Delete, None)
    }

    /// Adds one additional header, replacing an earlier one with the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let headers = self.additional_headers.get_or_insert_with(Headers::new);
        insert_header(headers, name.into(), value.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn additional_headers(&self) -> Option<&Headers> {
        self.additional_headers.as_ref()
    }

    /// Effective headers: `Content-Type: application/json` overlaid with the
    /// additional headers. On a name collision the additional header wins.
    pub fn headers(&self) -> Headers {
        let mut headers = Headers::from([(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())]);
        if let Some(additional) = &self.additional_headers {
            for (name, value) in additional {
                insert_header(&mut headers, name.clone(), value.clone());
            }
        }
        headers
    }
}

/// Header names compare case-insensitively, so an existing entry that differs
/// only in case is replaced rather than duplicated.
fn insert_header(headers: &mut Headers, name: String, value: String) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
    headers.insert(name, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_headers() -> Headers {
        Headers::from([("Content-Type".to_string(), "application/json".to_string())])
    }

    #[test]
    fn no_additional_headers_yields_only_default() {
        for endpoint in [
            Endpoint::get("users"),
            Endpoint::post("users"),
            Endpoint::put("users/1"),
            Endpoint::delete("users/1"),
            Endpoint::new("", HttpMethod::Get, None),
        ] {
            assert_eq!(endpoint.headers(), default_headers());
        }
    }

    #[test]
    fn empty_additional_headers_yields_only_default() {
        let endpoint = Endpoint::new("users", HttpMethod::Get, Some(Headers::new()));
        assert_eq!(endpoint.headers(), default_headers());
    }

    #[test]
    fn additional_header_overrides_default() {
        let additional = Headers::from([("Content-Type".to_string(), "text/plain".to_string())]);
        let endpoint = Endpoint::new("upload", HttpMethod::Post, Some(additional));
        let headers = endpoint.headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["Content-Type"], "text/plain");
    }

    #[test]
    fn override_ignores_name_case() {
        let endpoint = Endpoint::post("upload").with_header("content-type", "application/octet-stream");
        let headers = endpoint.headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["content-type"], "application/octet-stream");
    }

    #[test]
    fn additional_headers_are_merged_with_default() {
        let endpoint = Endpoint::get("me")
            .with_header("Authorization", "Bearer token")
            .with_header("Accept", "application/json");
        let headers = endpoint.headers();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers["Content-Type"], "application/json");
        assert_eq!(headers["Authorization"], "Bearer token");
        assert_eq!(headers["Accept"], "application/json");
    }

    #[test]
    fn with_header_replaces_previous_value() {
        let endpoint = Endpoint::get("me")
            .with_header("Authorization", "Bearer old")
            .with_header("authorization", "Bearer new");
        let additional = endpoint.additional_headers().unwrap();
        assert_eq!(additional.len(), 1);
        assert_eq!(additional["authorization"], "Bearer new");
    }

    #[test]
    fn accessors_return_constructor_values() {
        let endpoint = Endpoint::delete("users/42");
        assert_eq!(endpoint.path(), "users/42");
        assert_eq!(endpoint.method(), HttpMethod::Delete);
        assert!(endpoint.additional_headers().is_none());
    }
}
