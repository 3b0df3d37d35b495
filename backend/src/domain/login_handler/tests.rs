//! Unit tests for the login orchestrator.
//!
//! Cover the precedence of validation rules when several fields are wrong at
//! once, every authentication outcome, and containment of port failures.

use std::sync::Arc;

use async_trait::async_trait;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{AuthenticationError, MockAuthenticationPort};
use crate::domain::{EmailFormatValidator, ErrorDescriptor, ErrorKind, LoginBody, LoginField};

const IDENTIFIER: &str = "a@b.com";
const SECRET: &str = "x";

fn build_handler(port: MockAuthenticationPort) -> LoginHandler {
    LoginHandler::builder()
        .authenticator(Arc::new(port))
        .format_validator(Arc::new(EmailFormatValidator))
        .build()
}

/// Port that must never be reached.
#[fixture]
fn untouched_port() -> MockAuthenticationPort {
    let mut port = MockAuthenticationPort::new();
    port.expect_authenticate().never();
    port
}

/// Port returning `result` once for the well-formed credentials.
fn port_returning(
    result: Result<Option<AccessToken>, AuthenticationError>,
) -> MockAuthenticationPort {
    let mut port = MockAuthenticationPort::new();
    port.expect_authenticate()
        .withf(|identifier, secret| identifier == IDENTIFIER && secret.expose() == SECRET)
        .times(1)
        .return_once(move |_, _| result);
    port
}

fn well_formed() -> IncomingRequest {
    IncomingRequest::with_body(
        LoginBody::default()
            .with_identifier(IDENTIFIER)
            .with_secret(SECRET),
    )
}

fn assert_error(response: &LoginResponse, status: u16, expected: ErrorDescriptor) {
    assert_eq!(response.status_code(), status);
    assert_eq!(response.error(), Some(&expected));
}

struct PanickingPort;

#[async_trait]
impl AuthenticationPort for PanickingPort {
    async fn authenticate(
        &self,
        _identifier: &str,
        _secret: &Secret,
    ) -> Result<Option<AccessToken>, AuthenticationError> {
        panic!("identity backend exploded");
    }
}

#[rstest]
#[tokio::test]
async fn absent_envelope_is_a_server_fault(untouched_port: MockAuthenticationPort) {
    let handler = build_handler(untouched_port);
    let response = handler.handle(None).await;
    assert_error(&response, 500, ErrorDescriptor::server_fault());
}

#[rstest]
#[tokio::test]
async fn absent_body_is_a_server_fault(untouched_port: MockAuthenticationPort) {
    let handler = build_handler(untouched_port);
    let response = handler.handle(Some(&IncomingRequest::default())).await;
    assert_error(&response, 500, ErrorDescriptor::server_fault());
}

#[rstest]
#[case::nothing(LoginBody::default(), ErrorDescriptor::missing_param(LoginField::Identifier))]
#[case::secret_only(
    LoginBody::default().with_secret("123456"),
    ErrorDescriptor::missing_param(LoginField::Identifier)
)]
#[case::empty_identifier(
    LoginBody::default().with_identifier("").with_secret("123456"),
    ErrorDescriptor::missing_param(LoginField::Identifier)
)]
#[case::presence_before_format_and_secret(
    LoginBody::default().with_identifier(""),
    ErrorDescriptor::missing_param(LoginField::Identifier)
)]
#[case::format_before_secret(
    LoginBody::default().with_identifier("not-an-email"),
    ErrorDescriptor::invalid_param(LoginField::Identifier)
)]
#[case::format_with_secret(
    LoginBody::default().with_identifier("not-an-email").with_secret(SECRET),
    ErrorDescriptor::invalid_param(LoginField::Identifier)
)]
#[case::whitespace_identifier(
    LoginBody::default().with_identifier("   ").with_secret(SECRET),
    ErrorDescriptor::invalid_param(LoginField::Identifier)
)]
#[case::identifier_only(
    LoginBody::default().with_identifier(IDENTIFIER),
    ErrorDescriptor::missing_param(LoginField::Secret)
)]
#[case::empty_secret(
    LoginBody::default().with_identifier(IDENTIFIER).with_secret(""),
    ErrorDescriptor::missing_param(LoginField::Secret)
)]
#[tokio::test]
async fn first_violated_rule_decides_the_response(
    untouched_port: MockAuthenticationPort,
    #[case] body: LoginBody,
    #[case] expected: ErrorDescriptor,
) {
    let handler = build_handler(untouched_port);
    let response = handler.handle(Some(&IncomingRequest::with_body(body))).await;
    assert_error(&response, 400, expected);
}

#[rstest]
#[tokio::test]
async fn format_check_is_skipped_without_validator() {
    let strict_port_handler = LoginHandler::builder()
        .authenticator(Arc::new(port_returning(Ok(None))))
        .build();
    let rejected = strict_port_handler.handle(Some(&well_formed())).await;
    assert_error(&rejected, 401, ErrorDescriptor::unauthorized());

    let mut lenient = MockAuthenticationPort::new();
    lenient
        .expect_authenticate()
        .withf(|identifier, _| identifier == "admin")
        .times(1)
        .return_once(|_, _| Ok(Some(AccessToken::new("tok-admin"))));
    let lenient_handler = LoginHandler::builder()
        .authenticator(Arc::new(lenient))
        .build();
    let bare_name = IncomingRequest::with_body(
        LoginBody::default()
            .with_identifier("admin")
            .with_secret(SECRET),
    );
    let accepted = lenient_handler.handle(Some(&bare_name)).await;
    assert_eq!(accepted.status_code(), 200);
}

#[rstest]
#[tokio::test]
async fn custom_format_policy_replaces_email_rule(untouched_port: MockAuthenticationPort) {
    let handler = LoginHandler::builder()
        .authenticator(Arc::new(untouched_port))
        .format_validator(Arc::new(|value: &str| value.starts_with("emp-")))
        .build();
    let request = IncomingRequest::with_body(
        LoginBody::default()
            .with_identifier(IDENTIFIER)
            .with_secret(SECRET),
    );
    let response = handler.handle(Some(&request)).await;
    assert_error(
        &response,
        400,
        ErrorDescriptor::invalid_param(LoginField::Identifier),
    );
}

#[rstest]
#[tokio::test]
async fn issued_token_is_echoed_back() {
    let handler = build_handler(port_returning(Ok(Some(AccessToken::new("tok1")))));
    let response = handler.handle(Some(&well_formed())).await;
    assert_eq!(response.status_code(), 200);
    let token = response.payload().map(|payload| payload.access_token().as_str());
    assert_eq!(token, Some("tok1"));
}

#[rstest]
#[tokio::test]
async fn absent_token_is_unauthorized() {
    let handler = build_handler(port_returning(Ok(None)));
    let response = handler.handle(Some(&well_formed())).await;
    assert_error(&response, 401, ErrorDescriptor::unauthorized());
}

#[rstest]
#[case(AuthenticationError::unavailable("connection refused"))]
#[case(AuthenticationError::backend("query failed"))]
#[tokio::test]
async fn port_errors_become_server_faults(#[case] err: AuthenticationError) {
    let handler = build_handler(port_returning(Err(err)));
    let response = handler.handle(Some(&well_formed())).await;
    assert_error(&response, 500, ErrorDescriptor::server_fault());
}

#[rstest]
#[tokio::test]
async fn panicking_port_is_contained() {
    let handler = LoginHandler::builder()
        .authenticator(Arc::new(PanickingPort))
        .format_validator(Arc::new(EmailFormatValidator))
        .build();
    let response = handler.handle(Some(&well_formed())).await;
    assert_error(&response, 500, ErrorDescriptor::server_fault());
}

#[rstest]
#[tokio::test]
async fn missing_port_is_a_server_fault() {
    let handler = LoginHandler::builder()
        .format_validator(Arc::new(EmailFormatValidator))
        .build();
    let response = handler.handle(Some(&well_formed())).await;
    assert_error(&response, 500, ErrorDescriptor::server_fault());
}

#[rstest]
#[tokio::test]
async fn missing_port_does_not_mask_validation_errors() {
    let handler = LoginHandler::default();
    let request = IncomingRequest::with_body(LoginBody::default().with_secret(SECRET));
    let response = handler.handle(Some(&request)).await;
    assert_error(
        &response,
        400,
        ErrorDescriptor::missing_param(LoginField::Identifier),
    );
}

#[rstest]
#[tokio::test]
async fn repeated_requests_yield_identical_responses() {
    let mut port = MockAuthenticationPort::new();
    port.expect_authenticate()
        .times(2)
        .returning(|_, _| Ok(Some(AccessToken::new("tok1"))));
    let handler = build_handler(port);
    let request = well_formed();

    let first = handler.handle(Some(&request)).await;
    let second = handler.handle(Some(&request)).await;
    assert_eq!(first, second);
}

#[rstest]
#[tokio::test]
async fn clones_share_collaborators() {
    let mut port = MockAuthenticationPort::new();
    port.expect_authenticate()
        .times(2)
        .returning(|_, _| Ok(None));
    let handler = build_handler(port);
    let clone = handler.clone();

    let first = handler.handle(Some(&well_formed())).await;
    let second = clone.handle(Some(&well_formed())).await;
    assert_eq!(first.error().map(ErrorDescriptor::kind), Some(ErrorKind::Unauthorized));
    assert_eq!(first, second);
}

#[rstest]
#[case(AuthResult::Token(AccessToken::new("tok1")), 200)]
#[case(AuthResult::NoCredentialMatch, 401)]
#[case(AuthResult::Fault, 500)]
fn auth_results_map_to_responses(#[case] result: AuthResult, #[case] status: u16) {
    assert_eq!(LoginResponse::from(result).status_code(), status);
}

#[rstest]
fn debug_output_reports_configured_collaborators() {
    let handler = LoginHandler::builder()
        .format_validator(Arc::new(EmailFormatValidator))
        .build();
    assert_eq!(
        format!("{handler:?}"),
        "LoginHandler { authenticator: false, format_validator: true }"
    );
}
