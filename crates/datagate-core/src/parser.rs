use serde::Deserialize;
use serde_json::Value;

/// Wire shape of a system error payload
#[derive(Debug, Clone, Deserialize)]
pub struct SystemErrorDto {
    pub code: String,
    #[serde(default, rename = "traceId")]
    pub trace_id: Option<String>,
}

/// Wire shape of a validation error payload
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationErrorDto {
    pub code: String,
    #[serde(default, rename = "traceId")]
    pub trace_id: Option<String>,
    pub details: ErrorsListDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorsListDto {
    #[serde(default)]
    pub errors: Vec<ErrorDetailDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetailDto {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub value: String,
}

/// Outcome of parsing a raw error body
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Body carried `code` and `details.errors`
    Validation(ValidationErrorDto),
    /// Body carried at least a string `code`
    System(SystemErrorDto),
    /// Not valid JSON, or JSON without a usable `code`
    Unparsed,
}

/// Parse raw bytes purporting to be a JSON error payload
///
/// Best-effort: unknown fields are ignored, a body with both `code` and
/// `details.errors` is always a validation descriptor (even with an empty
/// list), and anything without a string `code` is `Unparsed`. Never panics
/// and never returns an error to the caller
pub fn parse_error_body(body: &[u8]) -> ParseOutcome {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return ParseOutcome::Unparsed;
    };

    if !value.get("code").is_some_and(Value::is_string) {
        return ParseOutcome::Unparsed;
    }

    let has_errors = value
        .get("details")
        .is_some_and(|details| details.get("errors").is_some());

    if has_errors {
        match serde_json::from_value::<ValidationErrorDto>(value) {
            Ok(dto) => ParseOutcome::Validation(dto),
            Err(_) => ParseOutcome::Unparsed,
        }
    } else {
        match serde_json::from_value::<SystemErrorDto>(value) {
            Ok(dto) => ParseOutcome::System(dto),
            Err(_) => ParseOutcome::Unparsed,
        }
    }
}
