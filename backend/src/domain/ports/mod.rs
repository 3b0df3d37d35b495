//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod authentication_port;

#[cfg(test)]
pub use authentication_port::MockAuthenticationPort;
pub use authentication_port::{
    AuthenticationError, AuthenticationPort, FIXTURE_IDENTIFIER, FIXTURE_SECRET, FIXTURE_TOKEN,
    FixtureAuthenticationPort,
};
