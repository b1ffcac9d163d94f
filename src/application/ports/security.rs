// src/application/ports/security.rs
use crate::application::ApplicationResult;

/// Checks the bearer token presented with a request.
pub trait AccessTokenVerifier: Send + Sync {
    /// Fails with `ApplicationError::Unauthorized` when the token is not accepted.
    fn verify(&self, token: &str) -> ApplicationResult<()>;
}
