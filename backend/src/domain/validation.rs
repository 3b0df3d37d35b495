//! Presence and format checks for login fields.
//!
//! [`validate`] fixes the order in which rules apply: identifier presence,
//! identifier format (only when a [`FormatValidator`] is supplied), then
//! secret presence. Only the first violated rule is reported.

use crate::domain::{LoginBody, LoginField, Secret};

/// Longest address accepted by [`EmailFormatValidator`].
pub const MAX_EMAIL_LEN: usize = 254;

/// Whether a field value was supplied.
///
/// Absent values and empty strings count as missing. Whitespace is kept as
/// submitted; rejecting it is the format validator's job. Secrets follow the
/// same rule through [`Secret::is_empty`].
///
/// # Examples
/// ```
/// use login_router::domain::is_present;
///
/// assert!(is_present(Some("a@b.com")));
/// assert!(!is_present(Some("")));
/// assert!(!is_present(None));
/// ```
#[must_use]
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|raw| !raw.is_empty())
}

/// Pluggable format policy for the identifier field.
///
/// Implemented for any `Fn(&str) -> bool` so ad-hoc rules need no type.
pub trait FormatValidator: Send + Sync {
    /// Whether `value` satisfies the format.
    fn is_valid(&self, value: &str) -> bool;
}

impl<F> FormatValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, value: &str) -> bool {
        self(value)
    }
}

/// Structural email check: `local@domain.tld`.
///
/// Rejects whitespace anywhere, more than one `@`, an empty local part, and
/// domains without an inner dot or with empty labels.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailFormatValidator;

impl FormatValidator for EmailFormatValidator {
    fn is_valid(&self, value: &str) -> bool {
        if value.len() > MAX_EMAIL_LEN || value.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        !local.is_empty()
            && !domain.contains('@')
            && domain.contains('.')
            && domain.split('.').all(|label| !label.is_empty())
    }
}

/// Result of checking a login body against the field rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome<'a> {
    /// A required field was absent or empty.
    MissingField(LoginField),
    /// A field was present but rejected by the format validator.
    InvalidFormat(LoginField),
    /// Every rule passed; carries the credentials to authenticate.
    Valid {
        /// Identifier as submitted.
        identifier: &'a str,
        /// Secret as submitted.
        secret: &'a Secret,
    },
}

/// Apply the field rules to `body` in their fixed order.
///
/// # Examples
/// ```
/// use login_router::domain::{
///     EmailFormatValidator, LoginBody, LoginField, ValidationOutcome, validate,
/// };
///
/// let body = LoginBody::default().with_identifier("not-an-email");
/// let outcome = validate(&body, Some(&EmailFormatValidator));
/// assert_eq!(outcome, ValidationOutcome::InvalidFormat(LoginField::Identifier));
/// ```
#[must_use]
pub fn validate<'a>(
    body: &'a LoginBody,
    format: Option<&dyn FormatValidator>,
) -> ValidationOutcome<'a> {
    let Some(identifier) = body.identifier().filter(|raw| is_present(Some(*raw))) else {
        return ValidationOutcome::MissingField(LoginField::Identifier);
    };
    if format.is_some_and(|validator| !validator.is_valid(identifier)) {
        return ValidationOutcome::InvalidFormat(LoginField::Identifier);
    }
    let Some(secret) = body.secret().filter(|secret| !secret.is_empty()) else {
        return ValidationOutcome::MissingField(LoginField::Secret);
    };
    ValidationOutcome::Valid { identifier, secret }
}
