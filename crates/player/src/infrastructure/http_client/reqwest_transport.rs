use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::ports::outbound::{HttpResponse, HttpTransport, TransportError};

/// Native transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/races/dwarf"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "index": "dwarf", "name": "Dwarf" })),
            )
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new();
        let response = transport
            .get(&format!("{}/api/races/dwarf", server.uri()))
            .await
            .expect("response");

        assert!(response.is_success());
        let body: serde_json::Value = serde_json::from_str(&response.body).expect("json body");
        assert_eq!(body["name"], "Dwarf");
    }

    #[tokio::test]
    async fn non_success_status_is_not_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new();
        let response = transport
            .get(&format!("{}/api/spells", server.uri()))
            .await
            .expect("response");

        assert_eq!(response.status, 429);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn unreachable_host_is_a_request_error() {
        let transport = ReqwestTransport::new();
        let result = transport.get("http://127.0.0.1:9/api/races").await;
        assert!(matches!(result, Err(TransportError::Request(_))));
    }
}
