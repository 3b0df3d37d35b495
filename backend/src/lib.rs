//! Login request handling behind a hexagonal boundary.
//!
//! [`domain`] validates credential submissions, delegates to an injected
//! authentication port, and produces normalised responses. [`inbound`] adapts
//! that use-case to HTTP; [`doc`] describes it as OpenAPI.

pub mod doc;
pub mod domain;
pub mod inbound;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
