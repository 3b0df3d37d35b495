//! Error taxonomy surfaced by the login handler.
//!
//! Descriptors are transport agnostic and deliberately coarse: every internal
//! failure collapses to [`ErrorKind::ServerFault`] and carries no detail.
//! Inbound adapters serialise them verbatim as the response body.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::LoginField;

/// Stable machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ErrorKind {
    /// A required field was absent or empty.
    MissingParam,
    /// A field was present but failed format validation.
    InvalidParam,
    /// The authentication port produced no token.
    Unauthorized,
    /// Absent request, unusable collaborator, or any other internal failure.
    ServerFault,
}

impl ErrorKind {
    /// HTTP status code the kind maps to.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::MissingParam | Self::InvalidParam => 400,
            Self::Unauthorized => 401,
            Self::ServerFault => 500,
        }
    }

    const fn takes_subject(self) -> bool {
        matches!(self, Self::MissingParam | Self::InvalidParam)
    }
}

/// Error body returned for every non-success outcome.
///
/// ## Invariants
/// - `subject` is present for [`ErrorKind::MissingParam`] and
///   [`ErrorKind::InvalidParam`] and absent otherwise.
///
/// # Examples
/// ```
/// use login_router::domain::{ErrorDescriptor, ErrorKind, LoginField};
///
/// let err = ErrorDescriptor::missing_param(LoginField::Secret);
/// assert_eq!(err.kind(), ErrorKind::MissingParam);
/// assert_eq!(err.subject(), Some(LoginField::Secret));
/// assert_eq!(err.to_string(), "Missing param: secret");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "ErrorDescriptorDto", into = "ErrorDescriptorDto")]
pub struct ErrorDescriptor {
    kind: ErrorKind,
    subject: Option<LoginField>,
}

/// Validation errors raised when decoding an [`ErrorDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorDescriptorValidationError {
    /// A parameter error arrived without naming its field.
    #[error("{kind:?} requires a subject")]
    MissingSubject {
        /// Kind that was decoded.
        kind: ErrorKind,
    },
    /// A non-parameter error named a field.
    #[error("{kind:?} must not carry a subject")]
    UnexpectedSubject {
        /// Kind that was decoded.
        kind: ErrorKind,
    },
}

impl ErrorDescriptor {
    /// A required field was absent.
    #[must_use]
    pub const fn missing_param(field: LoginField) -> Self {
        Self {
            kind: ErrorKind::MissingParam,
            subject: Some(field),
        }
    }

    /// A field failed format validation.
    #[must_use]
    pub const fn invalid_param(field: LoginField) -> Self {
        Self {
            kind: ErrorKind::InvalidParam,
            subject: Some(field),
        }
    }

    /// Authentication produced no token.
    #[must_use]
    pub const fn unauthorized() -> Self {
        Self {
            kind: ErrorKind::Unauthorized,
            subject: None,
        }
    }

    /// Opaque internal failure.
    #[must_use]
    pub const fn server_fault() -> Self {
        Self {
            kind: ErrorKind::ServerFault,
            subject: None,
        }
    }

    /// Failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Offending field for parameter errors.
    #[must_use]
    pub const fn subject(&self) -> Option<LoginField> {
        self.subject
    }

    /// HTTP status code for this descriptor.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.subject) {
            (ErrorKind::MissingParam, Some(field)) => write!(f, "Missing param: {field}"),
            (ErrorKind::InvalidParam, Some(field)) => write!(f, "Invalid param: {field}"),
            (ErrorKind::MissingParam | ErrorKind::InvalidParam, None) => {
                write!(f, "Invalid request")
            }
            (ErrorKind::Unauthorized, _) => write!(f, "Unauthorized"),
            (ErrorKind::ServerFault, _) => write!(f, "Internal error"),
        }
    }
}

impl std::error::Error for ErrorDescriptor {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ErrorDescriptorDto {
    kind: ErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subject: Option<LoginField>,
}

impl From<ErrorDescriptor> for ErrorDescriptorDto {
    fn from(value: ErrorDescriptor) -> Self {
        Self {
            kind: value.kind,
            subject: value.subject,
        }
    }
}

impl TryFrom<ErrorDescriptorDto> for ErrorDescriptor {
    type Error = ErrorDescriptorValidationError;

    fn try_from(value: ErrorDescriptorDto) -> Result<Self, Self::Error> {
        let ErrorDescriptorDto { kind, subject } = value;
        match (kind.takes_subject(), subject.is_some()) {
            (true, false) => Err(ErrorDescriptorValidationError::MissingSubject { kind }),
            (false, true) => Err(ErrorDescriptorValidationError::UnexpectedSubject { kind }),
            _ => Ok(Self { kind, subject }),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Wire-format coverage for error descriptors.
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(ErrorDescriptor::missing_param(LoginField::Identifier), json!({"kind": "MissingParam", "subject": "identifier"}))]
    #[case(ErrorDescriptor::invalid_param(LoginField::Identifier), json!({"kind": "InvalidParam", "subject": "identifier"}))]
    #[case(ErrorDescriptor::missing_param(LoginField::Secret), json!({"kind": "MissingParam", "subject": "secret"}))]
    #[case(ErrorDescriptor::unauthorized(), json!({"kind": "Unauthorized"}))]
    #[case(ErrorDescriptor::server_fault(), json!({"kind": "ServerFault"}))]
    fn descriptors_serialise_to_wire_shape(#[case] descriptor: ErrorDescriptor, #[case] expected: Value) {
        let value = serde_json::to_value(descriptor).expect("serialise descriptor");
        assert_eq!(value, expected);
    }

    #[rstest]
    #[case(ErrorKind::MissingParam, 400)]
    #[case(ErrorKind::InvalidParam, 400)]
    #[case(ErrorKind::Unauthorized, 401)]
    #[case(ErrorKind::ServerFault, 500)]
    fn kinds_map_to_status_codes(#[case] kind: ErrorKind, #[case] status: u16) {
        assert_eq!(kind.status_code(), status);
    }

    #[rstest]
    #[case(json!({"kind": "MissingParam"}))]
    #[case(json!({"kind": "InvalidParam"}))]
    #[case(json!({"kind": "Unauthorized", "subject": "secret"}))]
    #[case(json!({"kind": "ServerFault", "subject": "identifier"}))]
    #[case(json!({"kind": "ServerFault", "detail": "db down"}))]
    fn decoding_rejects_inconsistent_payloads(#[case] payload: Value) {
        let result = serde_json::from_value::<ErrorDescriptor>(payload);
        assert!(result.is_err());
    }

    #[rstest]
    fn decoding_accepts_wire_shape() {
        let descriptor: ErrorDescriptor =
            serde_json::from_value(json!({"kind": "InvalidParam", "subject": "identifier"}))
                .expect("valid descriptor");
        assert_eq!(descriptor, ErrorDescriptor::invalid_param(LoginField::Identifier));
    }

    #[rstest]
    fn server_fault_message_is_opaque() {
        assert_eq!(ErrorDescriptor::server_fault().to_string(), "Internal error");
    }
}
