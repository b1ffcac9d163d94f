pub mod auth;
pub mod http_logger;

pub use auth::require_bearer_token;
pub use http_logger::log_requests;
