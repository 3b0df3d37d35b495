//! Login use-case orchestrator.
//!
//! [`LoginHandler::handle`] runs a single pass over the request and stops at
//! the first decisive branch:
//!
//! 1. absent envelope or body: `ServerFault`
//! 2. absent identifier: `MissingParam(identifier)`
//! 3. identifier rejected by the format validator, if one is configured:
//!    `InvalidParam(identifier)`
//! 4. absent secret: `MissingParam(secret)`
//! 5. authentication port: token gives 200, no token gives `Unauthorized`,
//!    anything else gives `ServerFault`
//!
//! Collaborators are injected once and shared read-only between requests.
//! Nothing raised by the authentication port escapes `handle`.

use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tracing::{debug, error, warn};

use crate::domain::ports::AuthenticationPort;
use crate::domain::{
    AccessToken, FormatValidator, IncomingRequest, LoginResponse, Secret, SuccessPayload,
    ValidationOutcome, validate,
};

/// What the authentication port call amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    /// Credentials matched and a token was issued.
    Token(AccessToken),
    /// Credentials matched nothing.
    NoCredentialMatch,
    /// The port was missing, returned an error, or panicked.
    Fault,
}

impl From<AuthResult> for LoginResponse {
    fn from(value: AuthResult) -> Self {
        match value {
            AuthResult::Token(token) => Self::success(SuccessPayload::new(token)),
            AuthResult::NoCredentialMatch => Self::unauthorized(),
            AuthResult::Fault => Self::server_fault(),
        }
    }
}

/// Orchestrates validation and authentication for one login request.
///
/// Cloning is cheap; clones share the same collaborators.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use login_router::domain::ports::FixtureAuthenticationPort;
/// use login_router::domain::{
///     EmailFormatValidator, IncomingRequest, LoginBody, LoginHandler,
/// };
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let handler = LoginHandler::builder()
///     .authenticator(Arc::new(FixtureAuthenticationPort::default()))
///     .format_validator(Arc::new(EmailFormatValidator))
///     .build();
/// let request = IncomingRequest::with_body(
///     LoginBody::default()
///         .with_identifier("admin@example.com")
///         .with_secret("password"),
/// );
/// let response = handler.handle(Some(&request)).await;
/// assert_eq!(response.status_code(), 200);
/// # });
/// ```
#[derive(Clone, Default)]
pub struct LoginHandler {
    authenticator: Option<Arc<dyn AuthenticationPort>>,
    format_validator: Option<Arc<dyn FormatValidator>>,
}

impl fmt::Debug for LoginHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginHandler")
            .field("authenticator", &self.authenticator.is_some())
            .field("format_validator", &self.format_validator.is_some())
            .finish()
    }
}

impl LoginHandler {
    /// Start configuring a handler.
    #[must_use]
    pub const fn builder() -> LoginHandlerBuilder {
        LoginHandlerBuilder {
            authenticator: None,
            format_validator: None,
        }
    }

    /// Produce exactly one response for `request`.
    ///
    /// `None` stands for a transport that delivered no envelope at all.
    #[tracing::instrument(name = "login.handle", skip_all)]
    pub async fn handle(&self, request: Option<&IncomingRequest>) -> LoginResponse {
        let Some(body) = request.and_then(IncomingRequest::body) else {
            debug!("login request without body");
            return LoginResponse::server_fault();
        };

        let (identifier, secret) = match validate(body, self.format_validator.as_deref()) {
            ValidationOutcome::Valid { identifier, secret } => (identifier, secret),
            ValidationOutcome::MissingField(field) => {
                debug!(%field, "login field missing");
                return LoginResponse::missing_param(field);
            }
            ValidationOutcome::InvalidFormat(field) => {
                debug!(%field, "login field has invalid format");
                return LoginResponse::invalid_param(field);
            }
        };

        let outcome = self.authenticate(identifier, secret).await;
        match &outcome {
            AuthResult::Token(_) => debug!("login succeeded"),
            AuthResult::NoCredentialMatch => debug!("login rejected"),
            AuthResult::Fault => debug!("login faulted"),
        }
        outcome.into()
    }

    /// Call the port once and classify the result.
    async fn authenticate(&self, identifier: &str, secret: &Secret) -> AuthResult {
        let Some(authenticator) = self.authenticator.as_deref() else {
            warn!("no authentication port configured");
            return AuthResult::Fault;
        };

        let call = AssertUnwindSafe(authenticator.authenticate(identifier, secret));
        match call.catch_unwind().await {
            Ok(Ok(Some(token))) => AuthResult::Token(token),
            Ok(Ok(None)) => AuthResult::NoCredentialMatch,
            Ok(Err(err)) => {
                error!(error = %err, "authentication port failed");
                AuthResult::Fault
            }
            Err(_) => {
                error!("authentication port panicked");
                AuthResult::Fault
            }
        }
    }
}

/// Builder for [`LoginHandler`].
///
/// Both collaborators are optional. Without a format validator the format
/// check is skipped; without an authenticator every well-formed request
/// yields `ServerFault`.
#[derive(Default)]
pub struct LoginHandlerBuilder {
    authenticator: Option<Arc<dyn AuthenticationPort>>,
    format_validator: Option<Arc<dyn FormatValidator>>,
}

impl LoginHandlerBuilder {
    /// Port used to verify credentials.
    #[must_use]
    pub fn authenticator(mut self, authenticator: Arc<dyn AuthenticationPort>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Format policy applied to the identifier.
    #[must_use]
    pub fn format_validator(mut self, format_validator: Arc<dyn FormatValidator>) -> Self {
        self.format_validator = Some(format_validator);
        self
    }

    /// Finish configuration.
    #[must_use]
    pub fn build(self) -> LoginHandler {
        LoginHandler {
            authenticator: self.authenticator,
            format_validator: self.format_validator,
        }
    }
}

#[cfg(test)]
mod tests;
