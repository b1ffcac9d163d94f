// src/infrastructure/security/token.rs
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::security::AccessTokenVerifier,
};
use sha2::{Digest, Sha256};

/// Accepts exactly one pre-shared token.
///
/// Only the SHA-256 digest of the configured token is kept, and presented
/// tokens are compared digest to digest so the comparison time does not
/// depend on how long a matching prefix is.
pub struct StaticTokenVerifier {
    expected: [u8; 32],
}

impl StaticTokenVerifier {
    pub fn new(token: &str) -> Self {
        Self {
            expected: digest(token),
        }
    }
}

fn digest(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}

impl AccessTokenVerifier for StaticTokenVerifier {
    fn verify(&self, token: &str) -> ApplicationResult<()> {
        let presented = digest(token);
        let diff = presented
            .iter()
            .zip(self.expected.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));

        if diff == 0 {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("Invalid authorization token"))
        }
    }
}
