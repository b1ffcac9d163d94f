// src/presentation/http/middleware/auth.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

const MISSING_HEADER: &str = "Authorization header is required";
const INVALID_FORMAT: &str = "Invalid authorization header format. Expected: Bearer <token>";

/// Rejects requests that do not carry the configured bearer token.
///
/// Expects `HttpState` to be installed as a request extension by an outer layer.
/// Rejections are reported by the request logger.
pub async fn require_bearer_token(req: Request, next: Next) -> Response {
    match authorize(&req) {
        Ok(()) => next.run(req).await,
        Err(err) => HttpError::from_error(err).into_response(),
    }
}

fn authorize(req: &Request) -> ApplicationResult<()> {
    let headers = req.headers();
    if headers
        .get(AUTHORIZATION)
        .is_none_or(|value| value.is_empty())
    {
        return Err(ApplicationError::unauthorized(MISSING_HEADER));
    }

    let header = headers
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| ApplicationError::unauthorized(INVALID_FORMAT))?;

    let state = req
        .extensions()
        .get::<HttpState>()
        .ok_or_else(|| ApplicationError::infrastructure("application state missing"))?;

    state.services.token_verifier().verify(header.token())
}
