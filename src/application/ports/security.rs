// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AdminActor};

/// Verifies the bearer token presented on moderation endpoints.
pub trait AdminAuthenticator: Send + Sync {
    fn authenticate(&self, token: &str) -> ApplicationResult<AdminActor>;
}
