use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::decoder::{ErrorDecoder, RawResponse};
use crate::error::{ClientError, Result};

/// Generic envelope returned by data-plane operations
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorResponse {
    pub status_code: u16,
    /// Response headers, multi-value semantics preserved
    pub headers: HashMap<String, Vec<String>>,
    /// Parsed JSON body; `None` when the response carried no body
    pub response_body: Option<JsonNode>,
}

impl ConnectorResponse {
    fn from_raw(operation: &str, raw: &RawResponse) -> Result<Self> {
        let response_body = match raw.body.as_deref() {
            None => None,
            Some(bytes) => {
                let value: Value =
                    serde_json::from_slice(bytes).map_err(|e| ClientError::Transport {
                        status: Some(raw.status.as_u16()),
                        message: format!("{operation}: malformed success payload: {e}"),
                    })?;
                Some(JsonNode::new(value))
            }
        };

        let mut headers: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in &raw.headers {
            if let Ok(value) = value.to_str() {
                headers
                    .entry(name.as_str().to_owned())
                    .or_default()
                    .push(value.to_owned());
            }
        }

        Ok(Self {
            status_code: raw.status.as_u16(),
            headers,
            response_body,
        })
    }
}

/// Navigable view over a JSON response body
///
/// Thin wrapper that keeps the underlying JSON tree type out of the public
/// surface, so the parser can be substituted without touching callers.
/// Navigation is total: missing properties and non-containers yield null
/// nodes and empty lists
#[derive(Debug, Clone, PartialEq)]
pub struct JsonNode(Value);

impl JsonNode {
    const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Property of an object node; null node when absent or not an object
    pub fn prop(&self, name: &str) -> Self {
        Self(self.0.get(name).cloned().unwrap_or(Value::Null))
    }

    /// Elements of an array node; empty for anything else
    pub fn elements(&self) -> Vec<Self> {
        match &self.0 {
            Value::Array(items) => items.iter().cloned().map(Self).collect(),
            _ => Vec::new(),
        }
    }

    /// Scalar leaf rendered as text; `None` for null and container nodes
    pub fn value(&self) -> Option<String> {
        match &self.0 {
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// String leaf; `None` for every other node type
    pub fn string_value(&self) -> Option<&str> {
        self.0.as_str()
    }

    pub const fn is_null(&self) -> bool {
        matches!(self.0, Value::Null)
    }
}

/// Single entry point coupling the success and error decoders
///
/// On 2xx the body is decoded into the envelope or a typed DTO; on any
/// other status the error decoder classifies the response. Stateless apart
/// from the injected decoder
#[derive(Debug, Clone)]
pub struct ResponseHandler {
    decoder: ErrorDecoder,
}

impl ResponseHandler {
    pub const fn new(decoder: ErrorDecoder) -> Self {
        Self { decoder }
    }

    /// Decode into the generic connector envelope
    pub async fn connector_response(
        &self,
        operation: &str,
        response: reqwest::Response,
    ) -> Result<ConnectorResponse> {
        let raw = RawResponse::from_http(response).await?;
        if raw.status.is_success() {
            ConnectorResponse::from_raw(operation, &raw)
        } else {
            Err(self.decoder.decode(operation, &raw))
        }
    }

    /// Decode into a caller-declared DTO
    pub async fn typed<T: DeserializeOwned>(
        &self,
        operation: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let raw = RawResponse::from_http(response).await?;
        if raw.status.is_success() {
            let body = raw.body.as_deref().unwrap_or_default();
            serde_json::from_slice(body).map_err(|e| ClientError::Transport {
                status: Some(raw.status.as_u16()),
                message: format!("{operation}: malformed success payload: {e}"),
            })
        } else {
            Err(self.decoder.decode(operation, &raw))
        }
    }

    /// Discard a success body, decode everything else
    pub async fn unit(&self, operation: &str, response: reqwest::Response) -> Result<()> {
        let raw = RawResponse::from_http(response).await?;
        if raw.status.is_success() {
            Ok(())
        } else {
            Err(self.decoder.decode(operation, &raw))
        }
    }
}
