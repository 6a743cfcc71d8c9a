#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed clients for the User Settings service
//!
//! The service exposes two API versions: v1 under `/settings` with
//! snake_case payloads, v2 under `/api/settings` with camelCase payloads
//! and per-channel activation. Both surfaces share the decoding core

pub mod dto;
mod v1;
mod v2;

pub use dto::Channel;
pub use v1::UserSettingsV1Client;
pub use v2::UserSettingsV2Client;
