//! HTTP inbound adapter exposing the login endpoint.

pub mod login;
pub mod state;

use actix_web::web;

/// Register every HTTP route under `/api/v1`.
///
/// Shared by the server binary and tests so both see the same routing.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use login_router::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").service(login::login));
}
