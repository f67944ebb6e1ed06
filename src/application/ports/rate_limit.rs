// src/application/ports/rate_limit.rs
use std::time::Duration;

/// At most `max_requests` accepted per client within any `window_secs` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub bucket: &'static str,
    pub max_requests: usize,
    pub window_secs: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed,
    Limited { retry_after: Duration },
}

pub trait RateLimiter: Send + Sync {
    /// Record an attempt by `client_key` and decide whether it may proceed.
    /// Rejected attempts are not recorded.
    fn check(&self, policy: &RateLimitPolicy, client_key: &str) -> RateLimitDecision;
}
