use std::collections::HashMap;
use std::sync::Arc;

use http::HeaderMap;
use serde_json::Value;
use url::Url;

use datagate_core::{
    CatalogMessageResolver, ClientError, ConnectorResponse, ErrorDecoder, ResponseHandler, Result,
};

use crate::types::StartBpRequest;

/// Async HTTP client for the Platform Gateway service
///
/// Reaches Data Factory resources in other registries and starts business
/// processes there; the caller's header bag is forwarded verbatim
#[derive(Clone)]
pub struct PlatformGatewayClient {
    http: reqwest::Client,
    base_url: Url,
    handler: ResponseHandler,
}

impl PlatformGatewayClient {
    /// Create a client with the built-in message catalog
    pub fn new(base_url: Url) -> Self {
        Self::with_handler(
            base_url,
            ResponseHandler::new(ErrorDecoder::new(Arc::new(CatalogMessageResolver))),
        )
    }

    /// Create a client with a custom response handler
    pub fn with_handler(base_url: Url, handler: ResponseHandler) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            handler,
        }
    }

    /// GET `/data-factory/{registryTarget}/{resource}/{id}`
    pub async fn perform_get(
        &self,
        registry_target: &str,
        resource: &str,
        id: &str,
        headers: HeaderMap,
    ) -> Result<ConnectorResponse> {
        let url = self.url(&format!("data-factory/{registry_target}/{resource}/{id}"))?;
        let response = self.http.get(url).headers(headers).send().await?;
        self.handler.connector_response("perform_get", response).await
    }

    /// POST `/data-factory/{registryTarget}/{resource}` with a JSON map of
    /// search params
    pub async fn perform_search(
        &self,
        registry_target: &str,
        resource: &str,
        params: &HashMap<String, Value>,
        headers: HeaderMap,
    ) -> Result<ConnectorResponse> {
        let url = self.url(&format!("data-factory/{registry_target}/{resource}"))?;
        let response = self
            .http
            .post(url)
            .headers(headers)
            .json(params)
            .send()
            .await?;
        self.handler
            .connector_response("perform_search", response)
            .await
    }

    /// GET `/data-factory/{registryTarget}/{resource}` with search params in
    /// the query string
    pub async fn perform_search_by_params(
        &self,
        registry_target: &str,
        resource: &str,
        params: &HashMap<String, String>,
        headers: HeaderMap,
    ) -> Result<ConnectorResponse> {
        let url = self.url(&format!("data-factory/{registry_target}/{resource}"))?;
        let response = self
            .http
            .get(url)
            .headers(headers)
            .query(params)
            .send()
            .await?;
        self.handler
            .connector_response("perform_search_by_params", response)
            .await
    }

    /// POST `/bp-gateway/{registryTarget}/api/start-bp`
    pub async fn start_bp(
        &self,
        registry_target: &str,
        request: &StartBpRequest,
        headers: HeaderMap,
    ) -> Result<ConnectorResponse> {
        let url = self.url(&format!("bp-gateway/{registry_target}/api/start-bp"))?;
        let response = self
            .http
            .post(url)
            .headers(headers)
            .json(request)
            .send()
            .await?;
        self.handler.connector_response("start_bp", response).await
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Config(format!("invalid URL: {e}")))
    }
}

impl std::fmt::Debug for PlatformGatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformGatewayClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
