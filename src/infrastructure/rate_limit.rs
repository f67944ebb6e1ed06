// src/infrastructure/rate_limit.rs
use crate::application::ports::{
    rate_limit::{RateLimitDecision, RateLimitPolicy, RateLimiter},
    time::Clock,
};
use chrono::{DateTime, Duration, Utc};
use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex, PoisonError},
};

type LogKey = (&'static str, String);

/// In-memory sliding-window log limiter, one timestamp log per
/// `(bucket, client)` pair.
pub struct SlidingWindowRateLimiter {
    clock: Arc<dyn Clock>,
    logs: Mutex<HashMap<LogKey, VecDeque<DateTime<Utc>>>>,
}

impl SlidingWindowRateLimiter {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            logs: Mutex::new(HashMap::new()),
        }
    }

    /// Drop logs with no entry inside `max_window_secs`.
    pub fn purge_idle(&self, max_window_secs: i64) {
        let cutoff = self.clock.now() - Duration::seconds(max_window_secs);
        let mut logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        logs.retain(|_, log| log.back().is_some_and(|last| *last > cutoff));
    }

    pub fn tracked_clients(&self) -> usize {
        self.logs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl RateLimiter for SlidingWindowRateLimiter {
    fn check(&self, policy: &RateLimitPolicy, client_key: &str) -> RateLimitDecision {
        let now = self.clock.now();
        let window = Duration::seconds(policy.window_secs);
        let cutoff = now - window;

        let mut logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        let log = logs
            .entry((policy.bucket, client_key.to_string()))
            .or_default();

        while log.front().is_some_and(|at| *at <= cutoff) {
            log.pop_front();
        }

        if log.len() >= policy.max_requests {
            let frees_at = log.front().map_or(now + window, |oldest| *oldest + window);
            let retry_after = (frees_at - now).to_std().unwrap_or_default();
            return RateLimitDecision::Limited { retry_after };
        }

        log.push_back(now);
        RateLimitDecision::Allowed
    }
}
