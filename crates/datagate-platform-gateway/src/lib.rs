#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed client for the Platform Gateway service
//!
//! Cross-registry data access and business-process initiation; responses
//! flow through the shared decoding core

mod client;
mod types;

pub use client::PlatformGatewayClient;
pub use types::StartBpRequest;
