use crate::presentation::http::error::ErrorReport;
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs every request once it completes, and reports error responses:
/// 5xx at `error` level with the underlying cause, 4xx at `warn`.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    if let Some(report) = response.extensions().get::<ErrorReport>() {
        if status.is_server_error() {
            tracing::error!(%method, %path, error = %report.message, "internal server error");
        } else {
            tracing::warn!(%method, %path, error = %report.message, "client error");
        }
    }

    tracing::info!(
        %method,
        %path,
        status = status.as_u16(),
        latency = ?started.elapsed(),
        "http request"
    );

    response
}
