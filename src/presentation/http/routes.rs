// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::news,
    error::{HttpError, panic_response},
    middleware::{log_requests, require_bearer_token},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{Method, StatusCode, Uri},
    middleware,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let news_routes = Router::new()
        .route("/create", post(news::create_news))
        .route("/edit/{id}", post(news::edit_news))
        .route("/list", get(news::list_news))
        .route_layer(middleware::from_fn(require_bearer_token));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(news_routes)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(fallback)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

async fn fallback(method: Method, uri: Uri) -> HttpError {
    HttpError::new(
        StatusCode::NOT_FOUND,
        format!("Cannot {method} {}", uri.path()),
    )
}

async fn method_not_allowed() -> HttpError {
    HttpError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
