// src/application/commands/submissions/rate_limit.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::rate_limit::{RateLimitDecision, RateLimitPolicy, RateLimiter},
};

const HOUR: i64 = 60 * 60;

pub const CONTACT_POLICY: RateLimitPolicy = RateLimitPolicy {
    bucket: "contact",
    max_requests: 5,
    window_secs: HOUR,
};

pub const BUSINESS_POLICY: RateLimitPolicy = RateLimitPolicy {
    bucket: "business",
    max_requests: 3,
    window_secs: HOUR,
};

pub const NEWSLETTER_POLICY: RateLimitPolicy = RateLimitPolicy {
    bucket: "newsletter",
    max_requests: 5,
    window_secs: HOUR,
};

pub(super) fn enforce(
    limiter: &dyn RateLimiter,
    policy: &RateLimitPolicy,
    client_key: &str,
) -> ApplicationResult<()> {
    match limiter.check(policy, client_key) {
        RateLimitDecision::Allowed => Ok(()),
        RateLimitDecision::Limited { retry_after } => {
            // Round up so clients never retry a second too early.
            let retry_after_secs =
                retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            tracing::warn!(
                bucket = policy.bucket,
                client = client_key,
                retry_after_secs,
                "submission rate limited"
            );
            Err(ApplicationError::rate_limited(retry_after_secs.max(1)))
        }
    }
}
