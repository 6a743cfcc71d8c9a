use http::HeaderMap;
use url::Url;
use wiremock::MockServer;

/// Start a mock backend and return it with a join-friendly base URL
pub async fn mock_backend() -> (MockServer, Url) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/", server.uri())).expect("mock server URI is a URL");
    (server, base_url)
}

/// Header bag the platform's callers typically forward
pub fn platform_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("content-type", "application/json".parse().expect("valid header"));
    headers.insert("x-access-token", "token".parse().expect("valid header"));
    headers
}
