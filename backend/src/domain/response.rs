//! Normalised responses for every login outcome.
//!
//! Constructors here are the only way to build a [`LoginResponse`], which keeps
//! the status code and body in agreement: 400/401/500 always carry an
//! [`ErrorDescriptor`], 200 always carries a [`SuccessPayload`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AccessToken, ErrorDescriptor, LoginField};

/// Status code for a successful login.
const OK: u16 = 200;

/// Which rule a bad request violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadRequest {
    /// The field was absent or empty.
    MissingField(LoginField),
    /// The field failed format validation.
    InvalidField(LoginField),
}

/// Body of a successful login.
///
/// # Examples
/// ```
/// use login_router::domain::{AccessToken, SuccessPayload};
///
/// let payload = SuccessPayload::new(AccessToken::new("tok1"));
/// let json = serde_json::to_value(&payload).unwrap();
/// assert_eq!(json, serde_json::json!({"accessToken": "tok1"}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SuccessPayload {
    access_token: AccessToken,
}

impl SuccessPayload {
    /// Wrap an issued token.
    #[must_use]
    pub const fn new(access_token: AccessToken) -> Self {
        Self { access_token }
    }

    /// The issued token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }
}

/// Either an error descriptor or a success payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Body for a 200 response.
    Success(SuccessPayload),
    /// Body for 400, 401 and 500 responses.
    Error(ErrorDescriptor),
}

/// Transport-neutral response produced once per login request.
///
/// # Examples
/// ```
/// use login_router::domain::{ErrorKind, LoginField, LoginResponse};
///
/// let response = LoginResponse::missing_param(LoginField::Identifier);
/// assert_eq!(response.status_code(), 400);
/// assert_eq!(response.error().map(|err| err.kind()), Some(ErrorKind::MissingParam));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    status_code: u16,
    body: ResponseBody,
}

impl LoginResponse {
    const fn from_error(descriptor: ErrorDescriptor) -> Self {
        Self {
            status_code: descriptor.status_code(),
            body: ResponseBody::Error(descriptor),
        }
    }

    /// 400 for the violated rule.
    #[must_use]
    pub const fn bad_request(reason: BadRequest) -> Self {
        match reason {
            BadRequest::MissingField(field) => Self::missing_param(field),
            BadRequest::InvalidField(field) => Self::invalid_param(field),
        }
    }

    /// 400 with `MissingParam` naming `field`.
    #[must_use]
    pub const fn missing_param(field: LoginField) -> Self {
        Self::from_error(ErrorDescriptor::missing_param(field))
    }

    /// 400 with `InvalidParam` naming `field`.
    #[must_use]
    pub const fn invalid_param(field: LoginField) -> Self {
        Self::from_error(ErrorDescriptor::invalid_param(field))
    }

    /// 401 with `Unauthorized`.
    #[must_use]
    pub const fn unauthorized() -> Self {
        Self::from_error(ErrorDescriptor::unauthorized())
    }

    /// 500 with `ServerFault`.
    #[must_use]
    pub const fn server_fault() -> Self {
        Self::from_error(ErrorDescriptor::server_fault())
    }

    /// 200 carrying `payload`.
    #[must_use]
    pub const fn success(payload: SuccessPayload) -> Self {
        Self {
            status_code: OK,
            body: ResponseBody::Success(payload),
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Error descriptor, for non-success responses.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorDescriptor> {
        match &self.body {
            ResponseBody::Error(descriptor) => Some(descriptor),
            ResponseBody::Success(_) => None,
        }
    }

    /// Success payload, for 200 responses.
    #[must_use]
    pub const fn payload(&self) -> Option<&SuccessPayload> {
        match &self.body {
            ResponseBody::Success(payload) => Some(payload),
            ResponseBody::Error(_) => None,
        }
    }

    /// Split into status code and body.
    #[must_use]
    pub fn into_parts(self) -> (u16, ResponseBody) {
        (self.status_code, self.body)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorKind;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(
        LoginResponse::bad_request(BadRequest::MissingField(LoginField::Identifier)),
        400,
        json!({"kind": "MissingParam", "subject": "identifier"})
    )]
    #[case(
        LoginResponse::bad_request(BadRequest::InvalidField(LoginField::Identifier)),
        400,
        json!({"kind": "InvalidParam", "subject": "identifier"})
    )]
    #[case(LoginResponse::unauthorized(), 401, json!({"kind": "Unauthorized"}))]
    #[case(LoginResponse::server_fault(), 500, json!({"kind": "ServerFault"}))]
    #[case(
        LoginResponse::success(SuccessPayload::new(AccessToken::new("tok1"))),
        200,
        json!({"accessToken": "tok1"})
    )]
    fn builders_pair_status_with_body(
        #[case] response: LoginResponse,
        #[case] status: u16,
        #[case] body: Value,
    ) {
        assert_eq!(response.status_code(), status);
        let (_, raw) = response.into_parts();
        assert_eq!(serde_json::to_value(raw).expect("serialise body"), body);
    }

    #[rstest]
    fn success_exposes_payload_only() {
        let response = LoginResponse::success(SuccessPayload::new(AccessToken::new("tok1")));
        assert!(response.error().is_none());
        let token = response.payload().map(|payload| payload.access_token().as_str());
        assert_eq!(token, Some("tok1"));
    }

    #[rstest]
    fn errors_expose_descriptor_only() {
        let response = LoginResponse::unauthorized();
        assert!(response.payload().is_none());
        assert_eq!(
            response.error().map(ErrorDescriptor::kind),
            Some(ErrorKind::Unauthorized)
        );
    }

    #[rstest]
    #[case(json!({"accessToken": "tok1"}), true)]
    #[case(json!({"kind": "ServerFault"}), false)]
    fn bodies_decode_to_matching_variant(#[case] raw: Value, #[case] success: bool) {
        let body: ResponseBody = serde_json::from_value(raw).expect("decode body");
        assert_eq!(matches!(body, ResponseBody::Success(_)), success);
    }
}
