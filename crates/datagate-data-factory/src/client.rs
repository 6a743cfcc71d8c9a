use std::collections::HashMap;
use std::sync::Arc;

use http::HeaderMap;
use serde_json::Value;
use url::Url;

use datagate_core::{
    CatalogMessageResolver, ClientError, ConnectorResponse, ErrorDecoder, ResponseHandler, Result,
};

/// Async HTTP client for the Data Factory service
///
/// Thin declarative surface: every operation substitutes its arguments
/// into a URL template, forwards the caller's header bag verbatim, and
/// hands the response to the shared decoding core
#[derive(Clone)]
pub struct DataFactoryClient {
    http: reqwest::Client,
    base_url: Url,
    handler: ResponseHandler,
}

impl DataFactoryClient {
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

    /// GET `/{resource}/{id}`
    pub async fn perform_get(
        &self,
        resource: &str,
        id: &str,
        headers: HeaderMap,
    ) -> Result<ConnectorResponse> {
        let url = self.url(&format!("{resource}/{id}"))?;
        let response = self.http.get(url).headers(headers).send().await?;
        self.handler.connector_response("perform_get", response).await
    }

    /// POST `/{resource}` with a JSON string body
    pub async fn perform_post(
        &self,
        resource: &str,
        body: &str,
        headers: HeaderMap,
    ) -> Result<ConnectorResponse> {
        let url = self.url(resource)?;
        let response = self
            .http
            .post(url)
            .headers(headers)
            .body(body.to_owned())
            .send()
            .await?;
        self.handler.connector_response("perform_post", response).await
    }

    /// PUT `/{resource}/{id}` with a JSON string body
    pub async fn perform_put(
        &self,
        resource: &str,
        id: &str,
        body: &str,
        headers: HeaderMap,
    ) -> Result<ConnectorResponse> {
        let url = self.url(&format!("{resource}/{id}"))?;
        let response = self
            .http
            .put(url)
            .headers(headers)
            .body(body.to_owned())
            .send()
            .await?;
        self.handler.connector_response("perform_put", response).await
    }

    /// PUT `/nested/{resource}` with a JSON string body
    pub async fn perform_put_nested(
        &self,
        resource: &str,
        body: &str,
        headers: HeaderMap,
    ) -> Result<ConnectorResponse> {
        let url = self.url(&format!("nested/{resource}"))?;
        let response = self
            .http
            .put(url)
            .headers(headers)
            .body(body.to_owned())
            .send()
            .await?;
        self.handler
            .connector_response("perform_put_nested", response)
            .await
    }

    /// PATCH `/partial/{resource}/{id}` with a JSON string body
    pub async fn perform_patch(
        &self,
        resource: &str,
        id: &str,
        body: &str,
        headers: HeaderMap,
    ) -> Result<ConnectorResponse> {
        let url = self.url(&format!("partial/{resource}/{id}"))?;
        let response = self
            .http
            .patch(url)
            .headers(headers)
            .body(body.to_owned())
            .send()
            .await?;
        self.handler.connector_response("perform_patch", response).await
    }

    /// DELETE `/{resource}/{id}`
    pub async fn perform_delete(
        &self,
        resource: &str,
        id: &str,
        headers: HeaderMap,
    ) -> Result<ConnectorResponse> {
        let url = self.url(&format!("{resource}/{id}"))?;
        let response = self.http.delete(url).headers(headers).send().await?;
        self.handler
            .connector_response("perform_delete", response)
            .await
    }

    /// POST `/search/{resource}` with a JSON map of search params
    pub async fn perform_search(
        &self,
        resource: &str,
        params: &HashMap<String, Value>,
        headers: HeaderMap,
    ) -> Result<ConnectorResponse> {
        let url = self.url(&format!("search/{resource}"))?;
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

    /// GET `/{resource}` with search params in the query string
    ///
    /// The query-driven counterpart of [`Self::perform_search`]; both
    /// behaviors exist in deployed registries
    pub async fn perform_search_by_params(
        &self,
        resource: &str,
        params: &HashMap<String, String>,
        headers: HeaderMap,
    ) -> Result<ConnectorResponse> {
        let url = self.url(resource)?;
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

    /// POST `/{resource}/{upload-type}` with a JSON string body
    pub async fn perform_post_batch(
        &self,
        resource: &str,
        upload_type: &str,
        body: &str,
        headers: HeaderMap,
    ) -> Result<ConnectorResponse> {
        let url = self.url(&format!("{resource}/{upload_type}"))?;
        let response = self
            .http
            .post(url)
            .headers(headers)
            .body(body.to_owned())
            .send()
            .await?;
        self.handler
            .connector_response("perform_post_batch", response)
            .await
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Config(format!("invalid URL: {e}")))
    }
}

impl std::fmt::Debug for DataFactoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataFactoryClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
