//! Domain primitives and the login use-case.
//!
//! Purpose: validate a credential submission, delegate authentication to an
//! injected port, and fold every outcome into a normalised response. Nothing
//! in this module knows about HTTP.
//!
//! Public surface:
//! - [`LoginHandler`]: the orchestrator.
//! - [`LoginResponse`] and [`ErrorDescriptor`]: the only things it returns.
//! - [`FormatValidator`] and [`ports::AuthenticationPort`]: the seams it is
//!   configured with.

pub mod error;
pub mod login;
pub mod login_handler;
pub mod ports;
pub mod response;
pub mod validation;

pub use self::error::{ErrorDescriptor, ErrorDescriptorValidationError, ErrorKind};
pub use self::login::{
    AccessToken, AccessTokenValidationError, IncomingRequest, LoginBody, LoginField, Secret,
};
pub use self::login_handler::{AuthResult, LoginHandler, LoginHandlerBuilder};
pub use self::response::{BadRequest, LoginResponse, ResponseBody, SuccessPayload};
pub use self::validation::{
    EmailFormatValidator, FormatValidator, MAX_EMAIL_LEN, ValidationOutcome, is_present, validate,
};
