// src/infrastructure/security/admin_token.rs
use crate::application::{
    dto::AdminActor,
    error::{ApplicationError, ApplicationResult},
    ports::{security::AdminAuthenticator, time::Clock},
};
use std::sync::Arc;

/// Accepts exactly one pre-shared token. Without a configured token every
/// request is rejected.
pub struct StaticTokenAuthenticator {
    token: Option<String>,
    clock: Arc<dyn Clock>,
}

impl StaticTokenAuthenticator {
    pub fn new(token: Option<String>, clock: Arc<dyn Clock>) -> Self {
        Self { token, clock }
    }
}

// Comparison time does not depend on where the first mismatch is.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

impl AdminAuthenticator for StaticTokenAuthenticator {
    fn authenticate(&self, token: &str) -> ApplicationResult<AdminActor> {
        let Some(expected) = self.token.as_deref() else {
            return Err(ApplicationError::unauthorized("admin access is not configured"));
        };

        if constant_time_eq(expected.as_bytes(), token.as_bytes()) {
            Ok(AdminActor {
                authenticated_at: self.clock.now(),
            })
        } else {
            tracing::warn!("rejected admin token");
            Err(ApplicationError::unauthorized("invalid admin token"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::time::SystemClock;

    fn authenticator(token: Option<&str>) -> StaticTokenAuthenticator {
        StaticTokenAuthenticator::new(token.map(str::to_string), Arc::new(SystemClock))
    }

    #[test]
    fn matching_token_is_accepted() {
        assert!(authenticator(Some("s3cret-admin-token")).authenticate("s3cret-admin-token").is_ok());
    }

    #[test]
    fn wrong_token_is_rejected() {
        let err = authenticator(Some("s3cret-admin-token"))
            .authenticate("s3cret-admin-tokem")
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
        assert!(authenticator(Some("s3cret-admin-token")).authenticate("").is_err());
    }

    #[test]
    fn unconfigured_token_rejects_everything() {
        assert!(authenticator(None).authenticate("anything").is_err());
    }
}
