use std::sync::Arc;

use http::HeaderMap;
use url::Url;
use uuid::Uuid;

use datagate_core::{
    CatalogMessageResolver, ClientError, ErrorDecoder, ResponseHandler, Result,
};

use crate::dto::Channel;
use crate::dto::v2::{
    SettingsDeactivateChannelInputDto, SettingsEmailInputDto, SettingsReadDto,
};

/// Client for the v2 User Settings surface (root `/api/settings`, camelCase)
#[derive(Clone)]
pub struct UserSettingsV2Client {
    http: reqwest::Client,
    base_url: Url,
    handler: ResponseHandler,
}

impl UserSettingsV2Client {
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

    /// GET `/api/settings/me` — settings of the token's subject
    pub async fn get_settings(&self, headers: HeaderMap) -> Result<SettingsReadDto> {
        let url = self.url("api/settings/me")?;
        let response = self.http.get(url).headers(headers).send().await?;
        self.handler.typed("get_settings", response).await
    }

    /// GET `/api/settings/{userId}` — settings of another user
    pub async fn get_settings_by_user_id(
        &self,
        user_id: Uuid,
        headers: HeaderMap,
    ) -> Result<SettingsReadDto> {
        let url = self.url(&format!("api/settings/{user_id}"))?;
        let response = self.http.get(url).headers(headers).send().await?;
        self.handler.typed("get_settings_by_user_id", response).await
    }

    /// POST `/api/settings/me/channels/email/activate`
    pub async fn activate_email_channel(
        &self,
        input: &SettingsEmailInputDto,
        headers: HeaderMap,
    ) -> Result<()> {
        let url = self.url("api/settings/me/channels/email/activate")?;
        let response = self
            .http
            .post(url)
            .headers(headers)
            .json(input)
            .send()
            .await?;
        self.handler.unit("activate_email_channel", response).await
    }

    /// POST `/api/settings/me/channels/diia/activate`
    pub async fn activate_diia_channel(&self, headers: HeaderMap) -> Result<()> {
        let url = self.url("api/settings/me/channels/diia/activate")?;
        let response = self.http.post(url).headers(headers).send().await?;
        self.handler.unit("activate_diia_channel", response).await
    }

    /// POST `/api/settings/me/channels/{channel}/deactivate`
    pub async fn deactivate_channel(
        &self,
        channel: Channel,
        input: &SettingsDeactivateChannelInputDto,
        headers: HeaderMap,
    ) -> Result<()> {
        let url = self.url(&format!(
            "api/settings/me/channels/{}/deactivate",
            channel.value()
        ))?;
        let response = self
            .http
            .post(url)
            .headers(headers)
            .json(input)
            .send()
            .await?;
        self.handler.unit("deactivate_channel", response).await
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Config(format!("invalid URL: {e}")))
    }
}

impl std::fmt::Debug for UserSettingsV2Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSettingsV2Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
