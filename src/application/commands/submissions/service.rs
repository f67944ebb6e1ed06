// src/application/commands/submissions/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{
        notification::{Notification, Notifier},
        rate_limit::RateLimiter,
        time::Clock,
    },
    domain::{
        business::{BusinessRepository, services::BusinessSlugService},
        contact::ContactMessageRepository,
        newsletter::NewsletterRepository,
    },
};

/// Public submission endpoints: validated, rate limited, stored, then
/// announced to the administrators.
pub struct SubmissionCommandService {
    pub(super) business_repo: Arc<dyn BusinessRepository>,
    pub(super) contact_repo: Arc<dyn ContactMessageRepository>,
    pub(super) newsletter_repo: Arc<dyn NewsletterRepository>,
    pub(super) slug_service: Arc<BusinessSlugService>,
    pub(super) notifier: Arc<dyn Notifier>,
    pub(super) rate_limiter: Arc<dyn RateLimiter>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SubmissionCommandService {
    pub fn new(
        business_repo: Arc<dyn BusinessRepository>,
        contact_repo: Arc<dyn ContactMessageRepository>,
        newsletter_repo: Arc<dyn NewsletterRepository>,
        slug_service: Arc<BusinessSlugService>,
        notifier: Arc<dyn Notifier>,
        rate_limiter: Arc<dyn RateLimiter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            business_repo,
            contact_repo,
            newsletter_repo,
            slug_service,
            notifier,
            rate_limiter,
            clock,
        }
    }

    /// Delivery failures are logged and swallowed; the submission itself is
    /// already stored.
    pub(super) async fn notify_best_effort(&self, notification: Notification) {
        let subject = notification.subject.clone();
        if let Err(err) = self.notifier.notify(notification).await {
            tracing::warn!(error = %err, subject = %subject, "admin notification failed");
        }
    }
}
