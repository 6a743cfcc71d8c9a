use std::sync::Arc;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};

use crate::error::{ClientError, ErrorDetail, ErrorsList, SystemFailure, ValidationFailure};
use crate::kind::ErrorKind;
use crate::parser::{ParseOutcome, ValidationErrorDto, parse_error_body};
use crate::resolver::MessageResolver;

/// Raw HTTP response as seen by the decoders
///
/// Facades build one from a [`reqwest::Response`] after the transport has
/// completed; the decoders themselves perform no I/O
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Absent when the response carried no body at all
    pub body: Option<Bytes>,
}

impl RawResponse {
    /// Drain a transport response into its raw parts
    pub async fn from_http(response: reqwest::Response) -> Result<Self, ClientError> {
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        Ok(Self {
            status,
            headers,
            body: if bytes.is_empty() { None } else { Some(bytes) },
        })
    }
}

/// Decoder of last resort for responses the core cannot classify
pub trait FallbackDecoder: Send + Sync {
    fn decode(&self, operation: &str, response: &RawResponse) -> ClientError;
}

/// Default fallback: everything becomes a transport failure
///
/// Salvages whatever body text is present for the diagnostic message
#[derive(Debug, Default, Clone, Copy)]
pub struct TransportFallback;

impl FallbackDecoder for TransportFallback {
    fn decode(&self, operation: &str, response: &RawResponse) -> ClientError {
        let body = response
            .body
            .as_deref()
            .map(String::from_utf8_lossy)
            .unwrap_or_default();

        let message = if body.is_empty() {
            format!("{operation}: unexpected response")
        } else {
            format!("{operation}: unexpected response: {body}")
        };

        ClientError::Transport {
            status: Some(response.status.as_u16()),
            message,
        }
    }
}

/// Translates raw error responses into the failure taxonomy
///
/// Pure over its inputs plus the injected resolver and fallback decoder;
/// fully re-entrant, no internal state
#[derive(Clone)]
pub struct ErrorDecoder {
    resolver: Arc<dyn MessageResolver>,
    fallback: Arc<dyn FallbackDecoder>,
}

impl ErrorDecoder {
    /// Create a decoder with the default [`TransportFallback`]
    pub fn new(resolver: Arc<dyn MessageResolver>) -> Self {
        Self::with_fallback(resolver, Arc::new(TransportFallback))
    }

    /// Create a decoder delegating unclassifiable responses to `fallback`
    pub fn with_fallback(
        resolver: Arc<dyn MessageResolver>,
        fallback: Arc<dyn FallbackDecoder>,
    ) -> Self {
        Self { resolver, fallback }
    }

    /// Decode a raw response into a typed failure
    ///
    /// Classification is body-driven: a decodable error payload yields a
    /// typed failure regardless of status. Every path terminates in a
    /// failure value; the decoder itself never fails
    pub fn decode(&self, operation: &str, response: &RawResponse) -> ClientError {
        let Some(body) = response.body.as_deref() else {
            tracing::debug!(
                operation,
                status = response.status.as_u16(),
                "empty error body, delegating to fallback decoder"
            );
            return self.fallback.decode(operation, response);
        };

        match parse_error_body(body) {
            ParseOutcome::Validation(dto) => ClientError::Validation(self.localize(dto)),
            // NOT_FOUND surfaces as a user-actionable validation failure
            // even without per-field details
            ParseOutcome::System(dto) if dto.code == ErrorKind::NotFound.name() => {
                ClientError::Validation(ValidationFailure {
                    code: dto.code,
                    details: ErrorsList {
                        errors: vec![ErrorDetail {
                            message: self.resolver.resolve(ErrorKind::NotFound.title_key()),
                            field: String::new(),
                            value: String::new(),
                        }],
                    },
                })
            }
            ParseOutcome::System(dto) => {
                let kind = ErrorKind::from_name_or_runtime_error(&dto.code);
                ClientError::System(SystemFailure {
                    code: dto.code,
                    localized_message: self.resolver.resolve(kind.title_key()),
                })
            }
            ParseOutcome::Unparsed => self.decode_by_status(operation, response),
        }
    }

    /// Classify an unparseable body by HTTP status
    ///
    /// Server errors and the service-level client statuses (404, 408, 409)
    /// become system failures named after the status; everything else goes
    /// to the fallback decoder
    fn decode_by_status(&self, operation: &str, response: &RawResponse) -> ClientError {
        let status = response.status;
        let service_level = status.is_server_error()
            || matches!(
                status,
                StatusCode::NOT_FOUND | StatusCode::REQUEST_TIMEOUT | StatusCode::CONFLICT
            );

        if service_level {
            let code = status_name(status);
            let kind = ErrorKind::from_name_or_runtime_error(&code);
            tracing::warn!(
                operation,
                status = status.as_u16(),
                code,
                "unparseable error body, classified by status"
            );
            ClientError::System(SystemFailure {
                code,
                localized_message: self.resolver.resolve(kind.title_key()),
            })
        } else {
            tracing::debug!(
                operation,
                status = status.as_u16(),
                "unparseable error body, delegating to fallback decoder"
            );
            self.fallback.decode(operation, response)
        }
    }

    fn localize(&self, dto: ValidationErrorDto) -> ValidationFailure {
        let kind = ErrorKind::from_name_or_runtime_error(&dto.code);
        let message = self.resolver.resolve(kind.title_key());

        let errors = dto
            .details
            .errors
            .into_iter()
            .map(|detail| ErrorDetail {
                message: message.clone(),
                field: detail.field,
                value: detail.value,
            })
            .collect();

        ValidationFailure {
            code: dto.code,
            details: ErrorsList { errors },
        }
    }
}

impl std::fmt::Debug for ErrorDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorDecoder").finish_non_exhaustive()
    }
}

/// Canonical SCREAMING_SNAKE name of an HTTP status
///
/// "Service Unavailable" becomes `SERVICE_UNAVAILABLE`; statuses without a
/// canonical reason fall back to the runtime-error name
fn status_name(status: StatusCode) -> String {
    status.canonical_reason().map_or_else(
        || ErrorKind::RuntimeError.name().to_owned(),
        |reason| {
            reason
                .to_uppercase()
                .replace(['\'', '.'], "")
                .replace([' ', '-'], "_")
        },
    )
}
