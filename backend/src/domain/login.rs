//! Login submission primitives.
//!
//! Inbound adapters translate whatever the transport delivered into an
//! [`IncomingRequest`]. Nothing here is validated on construction: absent and
//! empty fields are legitimate states that the login handler turns into
//! responses.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

/// Names of the fields a login submission may carry.
///
/// Serialised in lowercase so error descriptors read
/// `{"subject": "identifier"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoginField {
    /// The login name, usually an email address.
    Identifier,
    /// The password.
    Secret,
}

impl LoginField {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Secret => "secret",
        }
    }
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Password supplied by the caller.
///
/// The backing buffer is zeroed on drop and `Debug` output is redacted so the
/// value never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Zeroizing<String>);

impl Secret {
    /// Wrap a raw password.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Borrow the raw password for comparison by an authentication adapter.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the caller sent an empty password.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Credential fields carried by a login submission.
///
/// Both fields are optional: the transport guarantees no shape.
///
/// # Examples
/// ```
/// use login_router::domain::LoginBody;
///
/// let body = LoginBody::default().with_identifier("ada@example.com");
/// assert_eq!(body.identifier(), Some("ada@example.com"));
/// assert!(body.secret().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginBody {
    identifier: Option<String>,
    secret: Option<Secret>,
}

impl LoginBody {
    /// Build a body from optional parts.
    #[must_use]
    pub const fn new(identifier: Option<String>, secret: Option<Secret>) -> Self {
        Self { identifier, secret }
    }

    /// Set the identifier field.
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set the secret field.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<Secret>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Identifier as submitted, if any.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Secret as submitted, if any.
    #[must_use]
    pub const fn secret(&self) -> Option<&Secret> {
        self.secret.as_ref()
    }
}

/// Envelope handed to the login handler by an inbound adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingRequest {
    body: Option<LoginBody>,
}

impl IncomingRequest {
    /// Wrap an optional body.
    #[must_use]
    pub const fn new(body: Option<LoginBody>) -> Self {
        Self { body }
    }

    /// Envelope carrying the given body.
    #[must_use]
    pub const fn with_body(body: LoginBody) -> Self {
        Self::new(Some(body))
    }

    /// Body of the request, if the transport delivered one.
    #[must_use]
    pub const fn body(&self) -> Option<&LoginBody> {
        self.body.as_ref()
    }
}

/// Validation errors raised when constructing an [`AccessToken`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessTokenValidationError {
    /// The token was empty or whitespace only.
    #[error("access token must not be empty")]
    Empty,
}

/// Opaque credential issued by the authentication port.
///
/// ## Invariants
/// - The token is non-empty once trimmed of whitespace.
///
/// Serialises as a bare JSON string.
///
/// # Examples
/// ```
/// use login_router::domain::AccessToken;
///
/// let token = AccessToken::try_new("tok1").unwrap();
/// assert_eq!(token.as_str(), "tok1");
/// assert!(AccessToken::try_new("  ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a token, panicking if validation fails.
    ///
    /// # Panics
    /// Panics when `value` is blank. Use [`AccessToken::try_new`] for
    /// untrusted input.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        match Self::try_new(value) {
            Ok(token) => token,
            Err(err) => panic!("access tokens must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor rejecting blank tokens.
    ///
    /// # Errors
    /// Returns [`AccessTokenValidationError::Empty`] when `value` is blank.
    pub fn try_new(value: impl Into<String>) -> Result<Self, AccessTokenValidationError> {
        let raw: String = value.into();
        if raw.trim().is_empty() {
            return Err(AccessTokenValidationError::Empty);
        }
        Ok(Self(raw))
    }

    /// Token string as issued.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

impl TryFrom<String> for AccessToken {
    type Error = AccessTokenValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<AccessToken> for String {
    fn from(value: AccessToken) -> Self {
        value.0
    }
}
