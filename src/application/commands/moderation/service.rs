use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        business::BusinessRepository, contact::ContactMessageRepository,
        newsletter::NewsletterRepository,
    },
};

/// Administrator operations. Every entry point takes an `AdminActor`, which
/// can only be obtained through the configured `AdminAuthenticator`.
pub struct ModerationService {
    pub(super) business_repo: Arc<dyn BusinessRepository>,
    pub(super) contact_repo: Arc<dyn ContactMessageRepository>,
    pub(super) newsletter_repo: Arc<dyn NewsletterRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ModerationService {
    pub fn new(
        business_repo: Arc<dyn BusinessRepository>,
        contact_repo: Arc<dyn ContactMessageRepository>,
        newsletter_repo: Arc<dyn NewsletterRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            business_repo,
            contact_repo,
            newsletter_repo,
            clock,
        }
    }
}
