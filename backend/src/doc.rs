//! OpenAPI documentation for the login API.
//!
//! [`ApiDoc`] registers the login path and the request and response schemas
//! so clients can generate bindings against the normalised response shapes.

use utoipa::OpenApi;

use crate::domain::{AccessToken, ErrorDescriptor, ErrorKind, LoginField, SuccessPayload};
use crate::inbound::http::login::LoginRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Login router API",
        description = "Credential submission endpoint with normalised error responses.",
        license(name = "MIT", url = "https://opensource.org/license/mit")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(crate::inbound::http::login::login),
    components(schemas(
        LoginRequest,
        SuccessPayload,
        AccessToken,
        ErrorDescriptor,
        ErrorKind,
        LoginField
    )),
    tags(
        (name = "auth", description = "Credential verification")
    )
)]
pub struct ApiDoc;
