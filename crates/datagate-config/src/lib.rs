#![allow(clippy::must_use_candidate)]

//! Typed configuration for the datagate client facades
//!
//! One optional section per backend service, loaded from TOML with
//! `{{ env.VAR }}` placeholder expansion

mod env;

use std::path::Path;

use serde::Deserialize;
use url::Url;

pub use env::expand_env;

/// Base-URL configuration for the three client facades
///
/// All sections are optional; each facade constructor takes only its own
/// section
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientsConfig {
    /// Data Factory base URL
    #[serde(default, rename = "registry-rest-api")]
    pub registry_rest_api: Option<ServiceConfig>,
    /// Platform Gateway base URL
    #[serde(default, rename = "platform-gateway")]
    pub platform_gateway: Option<ServiceConfig>,
    /// User Settings base URL (both historical section names accepted)
    #[serde(
        default,
        rename = "user-settings-service",
        alias = "user-settings-service-api"
    )]
    pub user_settings_service: Option<ServiceConfig>,
}

/// Single backend service endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub url: Url,
}

impl ClientsConfig {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, placeholder expansion
    /// fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = expand_env(&raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that every configured endpoint is usable
    ///
    /// # Errors
    ///
    /// Returns an error if a section carries a non-HTTP URL
    pub fn validate(&self) -> anyhow::Result<()> {
        let sections = [
            ("registry-rest-api", &self.registry_rest_api),
            ("platform-gateway", &self.platform_gateway),
            ("user-settings-service", &self.user_settings_service),
        ];

        for (name, section) in sections {
            if let Some(service) = section
                && !matches!(service.url.scheme(), "http" | "https")
            {
                anyhow::bail!("{name}.url must use http or https, got `{}`", service.url);
            }
        }

        Ok(())
    }
}
