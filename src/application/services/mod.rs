// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{moderation::ModerationService, submissions::SubmissionCommandService},
        dto::AdminActor,
        ports::{
            notification::Notifier, rate_limit::RateLimiter, security::AdminAuthenticator,
            time::Clock, util::SlugGenerator,
        },
        queries::directory::DirectoryQueryService,
    },
    domain::{
        business::{BusinessRepository, services::BusinessSlugService},
        contact::ContactMessageRepository,
        newsletter::NewsletterRepository,
    },
};

pub struct ApplicationServices {
    pub submissions: Arc<SubmissionCommandService>,
    pub moderation: Arc<ModerationService>,
    pub directory: Arc<DirectoryQueryService>,
    admin_authenticator: Arc<dyn AdminAuthenticator>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        business_repo: Arc<dyn BusinessRepository>,
        contact_repo: Arc<dyn ContactMessageRepository>,
        newsletter_repo: Arc<dyn NewsletterRepository>,
        notifier: Arc<dyn Notifier>,
        rate_limiter: Arc<dyn RateLimiter>,
        admin_authenticator: Arc<dyn AdminAuthenticator>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(BusinessSlugService::new(
            Arc::clone(&business_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let submissions = Arc::new(SubmissionCommandService::new(
            Arc::clone(&business_repo),
            Arc::clone(&contact_repo),
            Arc::clone(&newsletter_repo),
            Arc::clone(&slug_service),
            Arc::clone(&notifier),
            Arc::clone(&rate_limiter),
            Arc::clone(&clock),
        ));

        let moderation = Arc::new(ModerationService::new(
            Arc::clone(&business_repo),
            Arc::clone(&contact_repo),
            Arc::clone(&newsletter_repo),
            Arc::clone(&clock),
        ));

        let directory = Arc::new(DirectoryQueryService::new(Arc::clone(&business_repo)));

        Self {
            submissions,
            moderation,
            directory,
            admin_authenticator,
        }
    }

    /// Check a raw bearer token before any moderation call.
    pub fn authenticate_admin(&self, token: &str) -> ApplicationResult<AdminActor> {
        self.admin_authenticator.authenticate(token)
    }
}
