//! Login endpoint.
//!
//! ```text
//! POST /api/v1/login {"identifier":"admin@example.com","secret":"password"}
//! ```
//!
//! The body is streamed from `web::Payload` rather than through `web::Json` or
//! `web::Bytes` so that empty, malformed, oddly shaped, or oversized
//! submissions still reach the login handler and receive its normalised
//! response instead of an extractor rejection.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, post, web};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{
    ErrorDescriptor, IncomingRequest, LoginBody, LoginField, LoginResponse, Secret,
    SuccessPayload,
};
use crate::inbound::http::state::HttpState;

/// Largest login body read before the submission is treated as absent.
pub const MAX_LOGIN_BODY_BYTES: usize = 16 * 1024;

/// Login request body for `POST /api/v1/login`.
///
/// Documents the expected shape; the handler itself accepts any payload.
///
/// Example JSON:
/// `{"identifier":"admin@example.com","secret":"password"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Login name, an email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl Responder for LoginResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let (status_code, body) = self.into_parts();
        let status =
            StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(body)
    }
}

/// Authenticate a credential submission.
///
/// Every outcome, including an empty, unparseable, or oversized body, is
/// answered with one of the normalised responses.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = SuccessPayload),
        (status = 400, description = "Missing or malformed field", body = ErrorDescriptor),
        (status = 401, description = "Credentials rejected", body = ErrorDescriptor),
        (status = 500, description = "Internal server error", body = ErrorDescriptor)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(state: web::Data<HttpState>, payload: web::Payload) -> LoginResponse {
    let body = read_body(payload, MAX_LOGIN_BODY_BYTES)
        .await
        .and_then(|bytes| decode_body(&bytes));
    let request = IncomingRequest::new(body);
    state.login.handle(Some(&request)).await
}

/// Collect at most `limit` bytes of the request body.
///
/// Returns `None` when the stream fails or the body grows past `limit`.
async fn read_body(mut payload: web::Payload, limit: usize) -> Option<web::BytesMut> {
    let mut buffer = web::BytesMut::new();
    while let Some(next) = payload.next().await {
        let chunk = match next {
            Ok(chunk) => chunk,
            Err(err) => {
                debug!(error = %err, "failed to read login body");
                return None;
            }
        };
        if buffer.len().saturating_add(chunk.len()) > limit {
            debug!(limit, "login body exceeds size limit");
            return None;
        }
        buffer.extend_from_slice(&chunk);
    }
    Some(buffer)
}

/// Translate raw bytes into a login body.
///
/// Only a JSON object counts as a body. Fields that are not JSON strings are
/// treated as absent.
fn decode_body(payload: &[u8]) -> Option<LoginBody> {
    if payload.trim_ascii().is_empty() {
        return None;
    }
    let fields = match serde_json::from_slice::<Value>(payload) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) => {
            debug!("login body is not a JSON object");
            return None;
        }
        Err(err) => {
            debug!(error = %err, "login body is not valid JSON");
            return None;
        }
    };
    Some(LoginBody::new(
        string_field(&fields, LoginField::Identifier),
        string_field(&fields, LoginField::Secret).map(Secret::new),
    ))
}

fn string_field(fields: &Map<String, Value>, field: LoginField) -> Option<String> {
    fields
        .get(field.as_str())
        .and_then(Value::as_str)
        .map(str::to_owned)
}
