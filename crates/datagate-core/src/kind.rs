/// Closed catalog of registry error kinds
///
/// Each member is paired with the localization key of its user-facing title.
/// The catalog is process-wide and read-only; lookup by name is total and
/// defaults to [`ErrorKind::RuntimeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ClientError,
    HeadersAreMissing,
    InvalidHeaderValue,
    AuthenticationFailed,
    ForbiddenOperation,
    JwtExpired,
    NotFound,
    ConstraintViolation,
    SignatureViolation,
    ValidationError,
    FileNotFound,
    MethodArgumentTypeMismatch,
    UnsupportedMediaType,
    ThirdPartyServiceUnavailable,
    InternalContractViolation,
    TimeoutError,
    FileWasChanged,
    RuntimeError,
    ServiceUnavailable,
}

impl ErrorKind {
    /// All catalog members, in declaration order
    pub const ALL: [Self; 19] = [
        Self::ClientError,
        Self::HeadersAreMissing,
        Self::InvalidHeaderValue,
        Self::AuthenticationFailed,
        Self::ForbiddenOperation,
        Self::JwtExpired,
        Self::NotFound,
        Self::ConstraintViolation,
        Self::SignatureViolation,
        Self::ValidationError,
        Self::FileNotFound,
        Self::MethodArgumentTypeMismatch,
        Self::UnsupportedMediaType,
        Self::ThirdPartyServiceUnavailable,
        Self::InternalContractViolation,
        Self::TimeoutError,
        Self::FileWasChanged,
        Self::RuntimeError,
        Self::ServiceUnavailable,
    ];

    /// Wire name of the kind, as the registry services emit it in `code`
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClientError => "CLIENT_ERROR",
            Self::HeadersAreMissing => "HEADERS_ARE_MISSING",
            Self::InvalidHeaderValue => "INVALID_HEADER_VALUE",
            Self::AuthenticationFailed => "AUTHENTICATION_FAILED",
            Self::ForbiddenOperation => "FORBIDDEN_OPERATION",
            Self::JwtExpired => "JWT_EXPIRED",
            Self::NotFound => "NOT_FOUND",
            Self::ConstraintViolation => "CONSTRAINT_VIOLATION",
            Self::SignatureViolation => "SIGNATURE_VIOLATION",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::FileNotFound => "FILE_NOT_FOUND",
            Self::MethodArgumentTypeMismatch => "METHOD_ARGUMENT_TYPE_MISMATCH",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::ThirdPartyServiceUnavailable => "THIRD_PARTY_SERVICE_UNAVAILABLE",
            Self::InternalContractViolation => "INTERNAL_CONTRACT_VIOLATION",
            Self::TimeoutError => "TIMEOUT_ERROR",
            Self::FileWasChanged => "FILE_WAS_CHANGED",
            Self::RuntimeError => "RUNTIME_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Localization key of the user-facing title
    ///
    /// Keys follow the `data-factory.error.*` namespace of the platform's
    /// message catalog (including its historical `header-are-missing`
    /// spelling)
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::ClientError => "data-factory.error.client-error",
            Self::HeadersAreMissing => "data-factory.error.header-are-missing",
            Self::InvalidHeaderValue => "data-factory.error.invalid-header-value",
            Self::AuthenticationFailed => "data-factory.error.authentication-failed",
            Self::ForbiddenOperation => "data-factory.error.forbidden-operation",
            Self::JwtExpired => "data-factory.error.jwt-expired",
            Self::NotFound => "data-factory.error.not-found",
            Self::ConstraintViolation => "data-factory.error.constraint-violation",
            Self::SignatureViolation => "data-factory.error.signature-violation",
            Self::ValidationError => "data-factory.error.validation-error",
            Self::FileNotFound => "data-factory.error.file-not-found",
            Self::MethodArgumentTypeMismatch => {
                "data-factory.error.method-argument-type-mismatch"
            }
            Self::UnsupportedMediaType => "data-factory.error.unsupported-media-type",
            Self::ThirdPartyServiceUnavailable => {
                "data-factory.error.third-party-service-unavailable"
            }
            Self::InternalContractViolation => "data-factory.error.internal-contract-violation",
            Self::TimeoutError => "data-factory.error.timeout-error",
            Self::FileWasChanged => "data-factory.error.file-was-changed",
            Self::RuntimeError => "data-factory.error.runtime-error",
            Self::ServiceUnavailable => "data-factory.error.service-unavailable",
        }
    }

    /// Look up a kind by wire name, defaulting to [`ErrorKind::RuntimeError`]
    ///
    /// Total over arbitrary input; a linear scan is adequate for a catalog
    /// of this size
    pub fn from_name_or_runtime_error(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or(Self::RuntimeError)
    }
}
