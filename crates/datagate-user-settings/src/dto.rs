//! Wire shapes for both User Settings API surfaces
//!
//! The same logical DTOs exist under both versions but with different
//! naming conventions on the wire, so each surface declares its own types

use serde::{Deserialize, Serialize};

/// Notification channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Diia,
}

impl Channel {
    /// Wire value used in payloads and path segments
    pub const fn value(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Diia => "diia",
        }
    }
}

/// v1 surface, snake_case payloads
pub mod v1 {
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    use super::Channel;

    /// User settings as returned by the v1 surface
    #[derive(Debug, Clone, Deserialize)]
    pub struct SettingsReadDto {
        pub settings_id: Uuid,
        #[serde(default)]
        pub channels: Vec<ChannelReadDto>,
    }

    /// State of a single notification channel
    #[derive(Debug, Clone, Deserialize)]
    pub struct ChannelReadDto {
        pub channel: Channel,
        pub activated: bool,
        #[serde(default)]
        pub address: Option<String>,
    }

    /// Profile update accepted by the v1 surface
    #[derive(Debug, Clone, Serialize)]
    pub struct SettingsUpdateInputDto {
        pub email: String,
        pub phone: String,
        pub communication_allowed: bool,
    }

    /// Acknowledgement of a v1 update
    #[derive(Debug, Clone, Deserialize)]
    pub struct SettingsUpdateOutputDto {
        pub settings_id: Uuid,
    }
}

/// v2 surface, camelCase payloads
pub mod v2 {
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    use super::Channel;

    /// User settings as returned by the v2 surface
    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SettingsReadDto {
        pub settings_id: Uuid,
        #[serde(default)]
        pub channels: Vec<ChannelReadDto>,
    }

    /// State of a single notification channel
    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ChannelReadDto {
        pub channel: Channel,
        pub activated: bool,
        #[serde(default)]
        pub address: Option<String>,
    }

    /// Email activation request
    #[derive(Debug, Clone, Serialize)]
    pub struct SettingsEmailInputDto {
        pub address: String,
    }

    /// Channel deactivation request
    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SettingsDeactivateChannelInputDto {
        pub deactivation_reason: String,
    }
}
