use std::sync::Arc;

use http::HeaderMap;
use url::Url;
use uuid::Uuid;

use datagate_core::{
    CatalogMessageResolver, ClientError, ErrorDecoder, ResponseHandler, Result,
};

use crate::dto::v1::{SettingsReadDto, SettingsUpdateInputDto, SettingsUpdateOutputDto};

/// Client for the v1 User Settings surface (root `/settings`, snake_case)
#[derive(Clone)]
pub struct UserSettingsV1Client {
    http: reqwest::Client,
    base_url: Url,
    handler: ResponseHandler,
}

impl UserSettingsV1Client {
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

    /// GET `/settings` — settings of the token's subject
    pub async fn get_settings(&self, headers: HeaderMap) -> Result<SettingsReadDto> {
        let url = self.url("settings")?;
        let response = self.http.get(url).headers(headers).send().await?;
        self.handler.typed("get_settings", response).await
    }

    /// PUT `/settings` — update the subject's profile settings
    pub async fn update_settings(
        &self,
        input: &SettingsUpdateInputDto,
        headers: HeaderMap,
    ) -> Result<SettingsUpdateOutputDto> {
        let url = self.url("settings")?;
        let response = self
            .http
            .put(url)
            .headers(headers)
            .json(input)
            .send()
            .await?;
        self.handler.typed("update_settings", response).await
    }

    /// GET `/settings/{keycloakId}` — settings of another user
    pub async fn get_settings_by_keycloak_id(
        &self,
        keycloak_id: Uuid,
        headers: HeaderMap,
    ) -> Result<SettingsReadDto> {
        let url = self.url(&format!("settings/{keycloak_id}"))?;
        let response = self.http.get(url).headers(headers).send().await?;
        self.handler
            .typed("get_settings_by_keycloak_id", response)
            .await
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Config(format!("invalid URL: {e}")))
    }
}

impl std::fmt::Debug for UserSettingsV1Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSettingsV1Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Channel;

    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> UserSettingsV1Client {
        UserSettingsV1Client::new(Url::parse(base_url).unwrap())
    }

    fn test_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-access-token", "token".parse().unwrap());
        headers
    }

    #[tokio::test]
    async fn reads_snake_case_settings() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/settings"))
            .and(header("x-access-token", "token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "settings_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "channels": [{"channel": "email", "activated": true, "address": "user@example.com"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&format!("{}/", server.uri()));

        let settings = client.get_settings(test_headers()).await.unwrap();

        assert_eq!(
            settings.settings_id.to_string(),
            "3fa85f64-5717-4562-b3fc-2c963f66afa6"
        );
        assert_eq!(settings.channels[0].channel, Channel::Email);
    }

    #[tokio::test]
    async fn updates_settings_with_snake_case_body() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/settings"))
            .and(body_json(serde_json::json!({
                "email": "user@example.com",
                "phone": "+380501234567",
                "communication_allowed": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"settings_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6"}),
            ))
            .mount(&server)
            .await;

        let client = test_client(&format!("{}/", server.uri()));
        let input = SettingsUpdateInputDto {
            email: "user@example.com".to_owned(),
            phone: "+380501234567".to_owned(),
            communication_allowed: true,
        };

        let output = client.update_settings(&input, test_headers()).await.unwrap();

        assert_eq!(
            output.settings_id.to_string(),
            "3fa85f64-5717-4562-b3fc-2c963f66afa6"
        );
    }

    #[tokio::test]
    async fn reads_settings_of_another_user() {
        let server = MockServer::start().await;
        let keycloak_id: Uuid = "c2c19401-f1b7-4954-a230-ab15566e7318".parse().unwrap();

        Mock::given(method("GET"))
            .and(path(format!("/settings/{keycloak_id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "settings_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "channels": []
            })))
            .mount(&server)
            .await;

        let client = test_client(&format!("{}/", server.uri()));

        let settings = client
            .get_settings_by_keycloak_id(keycloak_id, test_headers())
            .await
            .unwrap();

        assert!(settings.channels.is_empty());
    }
}
