#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Error-decoding and response-translation core shared by the datagate
//! client facades
//!
//! Maps raw HTTP responses from the registry services into the platform's
//! failure taxonomy, resolves localized titles from the message catalog,
//! and decodes success bodies into the generic connector envelope or a
//! caller-declared DTO

pub mod decoder;
pub mod error;
pub mod kind;
pub mod parser;
pub mod resolver;
pub mod response;

pub use decoder::{ErrorDecoder, FallbackDecoder, RawResponse, TransportFallback};
pub use error::{ClientError, ErrorDetail, ErrorsList, Result, SystemFailure, ValidationFailure};
pub use kind::ErrorKind;
pub use parser::{ParseOutcome, parse_error_body};
pub use resolver::{CatalogMessageResolver, MessageResolver};
pub use response::{ConnectorResponse, JsonNode, ResponseHandler};
