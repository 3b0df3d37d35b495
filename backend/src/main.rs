//! Login server entry-point: loads settings, initialises tracing, and serves
//! the login endpoint.

mod server;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        ServerSettings::load_from_iter(std::env::args_os()).map_err(std::io::Error::other)?;
    create_server(&settings)?.await
}
