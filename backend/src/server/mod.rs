//! Server construction helpers.

mod config;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use login_router::domain::ports::FixtureAuthenticationPort;
use login_router::domain::{EmailFormatValidator, LoginHandler};
use login_router::inbound::http::configure;
use login_router::inbound::http::state::HttpState;
use tracing::info;

pub use config::{ServerSettings, SettingsError};

/// Assemble the login handler described by `settings`.
///
/// # Errors
/// Returns [`SettingsError::InvalidFixtureToken`] when the configured token is blank.
pub fn build_login_handler(settings: &ServerSettings) -> Result<LoginHandler, SettingsError> {
    let port = FixtureAuthenticationPort::new(
        settings.fixture_identifier(),
        settings.fixture_secret(),
        settings.fixture_token()?,
    );
    let base = LoginHandler::builder().authenticator(Arc::new(port));
    let configured = if settings.requires_email_identifier() {
        base.format_validator(Arc::new(EmailFormatValidator))
    } else {
        base
    };
    Ok(configured.build())
}

/// Bind the HTTP server using `settings`.
///
/// # Errors
/// Propagates [`std::io::Error`] when settings are invalid or binding fails.
pub fn create_server(settings: &ServerSettings) -> std::io::Result<Server> {
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let handler = build_login_handler(settings).map_err(std::io::Error::other)?;
    let state = web::Data::new(HttpState::new(handler));

    let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "login server listening");
    Ok(server)
}
