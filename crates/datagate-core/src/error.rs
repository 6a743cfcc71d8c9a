/// Core result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures surfaced by the client facades
///
/// `Validation` is user-actionable, `System` is retryable or reportable,
/// `Transport` and `Http` are infrastructure
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Per-field problems reported by the service
    #[error("validation failure ({})", .0.code)]
    Validation(ValidationFailure),

    /// Operational problem with a stable code and a localized message
    #[error("system failure ({}): {}", .0.code, .0.localized_message)]
    System(SystemFailure),

    /// Response the core could not classify
    #[error("transport failure: {message}")]
    Transport {
        /// HTTP status, when a response was received at all
        status: Option<u16>,
        /// Diagnostic message, not localized
        message: String,
    },

    /// HTTP transport or connection error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid client construction input
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Failure carrying a list of field-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Error code, preserved verbatim from the payload
    pub code: String,
    /// Field-level details with localized messages
    pub details: ErrorsList,
}

/// Container for field-level error details
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorsList {
    pub errors: Vec<ErrorDetail>,
}

/// Single field-level error
///
/// `field` and `value` come from the server payload unchanged; `message`
/// is the localized title resolved by the decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub message: String,
    pub field: String,
    pub value: String,
}

/// Failure carrying a single localized message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemFailure {
    /// Error code: a catalog member name or, for status-driven failures,
    /// the HTTP status's canonical name
    pub code: String,
    /// Localized title resolved from the message catalog
    pub localized_message: String,
}
