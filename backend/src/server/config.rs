//! Runtime settings loaded via OrthoConfig.
//!
//! Values are read from `LOGIN_*` environment variables, configuration files,
//! and command-line flags in the usual OrthoConfig precedence.

use std::net::{AddrParseError, SocketAddr};

use login_router::domain::ports::{FIXTURE_IDENTIFIER, FIXTURE_SECRET, FIXTURE_TOKEN};
use login_router::domain::{AccessToken, AccessTokenValidationError};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings controlling the HTTP listener and the credential fixture.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LOGIN")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Skip email format validation of the identifier.
    #[ortho_config(default = false)]
    pub allow_any_identifier: bool,
    /// Identifier accepted by the fixture authenticator.
    pub fixture_identifier: Option<String>,
    /// Secret accepted by the fixture authenticator.
    pub fixture_secret: Option<String>,
    /// Token issued by the fixture authenticator.
    pub fixture_token: Option<String>,
}

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not a `host:port` socket address.
    #[error("invalid bind address `{value}`: {source}")]
    InvalidBindAddr {
        /// Raw configured value.
        value: String,
        /// Parse failure.
        #[source]
        source: AddrParseError,
    },
    /// The fixture token is blank.
    #[error("invalid fixture token: {0}")]
    InvalidFixtureToken(#[from] AccessTokenValidationError),
}

impl ServerSettings {
    /// Return the configured bind address, falling back to the default.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                source,
            })
    }

    /// Identifier the fixture authenticator accepts.
    #[must_use]
    pub fn fixture_identifier(&self) -> &str {
        self.fixture_identifier
            .as_deref()
            .unwrap_or(FIXTURE_IDENTIFIER)
    }

    /// Secret the fixture authenticator accepts.
    #[must_use]
    pub fn fixture_secret(&self) -> &str {
        self.fixture_secret.as_deref().unwrap_or(FIXTURE_SECRET)
    }

    /// Token the fixture authenticator issues.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidFixtureToken`] when the token is blank.
    pub fn fixture_token(&self) -> Result<AccessToken, SettingsError> {
        let raw = self.fixture_token.as_deref().unwrap_or(FIXTURE_TOKEN);
        Ok(AccessToken::try_new(raw)?)
    }

    /// Whether identifiers must look like email addresses.
    #[must_use]
    pub const fn requires_email_identifier(&self) -> bool {
        !self.allow_any_identifier
    }
}
