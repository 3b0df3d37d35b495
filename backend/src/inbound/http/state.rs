//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain use-case and remain testable without I/O.

use std::sync::Arc;

use crate::domain::LoginHandler;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use login_router::domain::LoginHandler;
/// use login_router::domain::ports::FixtureAuthenticationPort;
/// use login_router::inbound::http::state::HttpState;
///
/// let handler = LoginHandler::builder()
///     .authenticator(Arc::new(FixtureAuthenticationPort::default()))
///     .build();
/// let state = HttpState::new(handler);
/// let _login = state.login.clone();
/// ```
#[derive(Debug, Clone)]
pub struct HttpState {
    /// Login use-case shared by every worker.
    pub login: Arc<LoginHandler>,
}

impl HttpState {
    /// Wrap the configured login handler.
    #[must_use]
    pub fn new(login: LoginHandler) -> Self {
        Self {
            login: Arc::new(login),
        }
    }
}
