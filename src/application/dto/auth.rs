use chrono::{DateTime, Utc};

/// Proof that the caller presented a valid moderation token.
#[derive(Debug, Clone)]
pub struct AdminActor {
    pub authenticated_at: DateTime<Utc>,
}
