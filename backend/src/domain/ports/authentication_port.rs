//! Driven port for credential verification.
//!
//! The login handler only learns whether a token was produced, no token was
//! produced, or the call failed. Why credentials were rejected stays inside the
//! adapter.

use async_trait::async_trait;

use crate::domain::{AccessToken, Secret};

use super::define_port_error;

define_port_error! {
    /// Failures raised by authentication adapters.
    pub enum AuthenticationError {
        /// The identity backend could not be reached.
        Unavailable {
            /// Transport-level detail.
            message: String,
        } => "authentication backend unavailable: {message}",
        /// The identity backend failed while checking credentials.
        Backend {
            /// Backend-reported detail.
            message: String,
        } => "authentication backend failed: {message}",
    }
}

/// Verifies an identifier/secret pair and issues a token.
///
/// `Ok(None)` means the credentials matched nothing; `Err` means the check
/// itself could not be carried out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationPort: Send + Sync {
    /// Authenticate `identifier` with `secret`.
    async fn authenticate(
        &self,
        identifier: &str,
        secret: &Secret,
    ) -> Result<Option<AccessToken>, AuthenticationError>;
}

/// Identifier accepted by [`FixtureAuthenticationPort::default`].
pub const FIXTURE_IDENTIFIER: &str = "admin@example.com";
/// Secret accepted by [`FixtureAuthenticationPort::default`].
pub const FIXTURE_SECRET: &str = "password";
/// Token issued by [`FixtureAuthenticationPort::default`].
pub const FIXTURE_TOKEN: &str = "fixture-access-token";

/// In-memory authenticator holding a single credential pair.
///
/// Used until a real identity backend is wired and in end-to-end tests.
///
/// # Examples
/// ```
/// use login_router::domain::Secret;
/// use login_router::domain::ports::{AuthenticationPort, FixtureAuthenticationPort};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let port = FixtureAuthenticationPort::default();
/// let token = port
///     .authenticate("admin@example.com", &Secret::new("password"))
///     .await
///     .unwrap();
/// assert_eq!(token.map(String::from).as_deref(), Some("fixture-access-token"));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct FixtureAuthenticationPort {
    identifier: String,
    secret: Secret,
    token: AccessToken,
}

impl FixtureAuthenticationPort {
    /// Accept `identifier`/`secret` and issue `token`.
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<Secret>, token: AccessToken) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
            token,
        }
    }
}

impl Default for FixtureAuthenticationPort {
    fn default() -> Self {
        Self::new(
            FIXTURE_IDENTIFIER,
            FIXTURE_SECRET,
            AccessToken::new(FIXTURE_TOKEN),
        )
    }
}

#[async_trait]
impl AuthenticationPort for FixtureAuthenticationPort {
    async fn authenticate(
        &self,
        identifier: &str,
        secret: &Secret,
    ) -> Result<Option<AccessToken>, AuthenticationError> {
        let matched = identifier == self.identifier && *secret == self.secret;
        Ok(matched.then(|| self.token.clone()))
    }
}
