//! Verify URL resolution and header merging against JSON test vectors stored
//! in `test-vectors/`.

use network_kit::{ApiConfig, ApiError, Endpoint, Headers, HttpMethod, NetworkClient};

#[test]
fn url_resolution_vectors() {
    let raw = include_str!("../../test-vectors/url_resolution.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let base_url = case["base_url"].as_str().unwrap();
        let path = case["path"].as_str().unwrap();

        let client = NetworkClient::new(ApiConfig::new(base_url));
        let result = client.build_request::<()>(&Endpoint::get(path), None);

        match case["expected_url"].as_str() {
            Some(expected) => {
                let request = result.unwrap_or_else(|e| panic!("{name}: unexpected error {e}"));
                assert_eq!(request.url, expected, "{name}: url");
            }
            None => assert!(matches!(result, Err(ApiError::BadUrl)), "{name}: expected BadUrl"),
        }
    }
}

#[test]
fn header_vectors() {
    let raw = include_str!("../../test-vectors/headers.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let method: HttpMethod = case["method"].as_str().unwrap().parse().unwrap();
        let additional: Option<Headers> = serde_json::from_value(case["additional_headers"].clone()).unwrap();
        let expected: Headers = serde_json::from_value(case["expected_headers"].clone()).unwrap();

        let endpoint = Endpoint::new("anything", method, additional);
        assert_eq!(endpoint.headers(), expected, "{name}: headers");

        let client = NetworkClient::new(ApiConfig::new("https://api.example.com"));
        let request = client.build_request::<()>(&endpoint, None).unwrap();
        assert_eq!(request.method, method, "{name}: method");
        assert_eq!(request.headers, expected, "{name}: request headers");
    }
}
