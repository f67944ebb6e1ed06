// src/application/commands/submissions/newsletter.rs
use super::{
    SubmissionCommandService,
    rate_limit::{NEWSLETTER_POLICY, enforce},
};
use crate::{
    application::{
        dto::SubscriptionDto, error::ApplicationResult, ports::notification::Notification,
    },
    domain::{
        errors::DomainError,
        newsletter::NewSubscriber,
        value_objects::{EmailAddress, Language},
    },
};

pub struct SubscribeNewsletterCommand {
    pub email: String,
    pub locale: Option<String>,
}

impl SubmissionCommandService {
    /// Subscribing twice is not an error; the second call reports
    /// `already_subscribed` and sends nothing.
    pub async fn subscribe_newsletter(
        &self,
        client_key: &str,
        command: SubscribeNewsletterCommand,
    ) -> ApplicationResult<SubscriptionDto> {
        enforce(self.rate_limiter.as_ref(), &NEWSLETTER_POLICY, client_key)?;

        let email = EmailAddress::new(command.email)?.normalized();
        let locale = match command.locale.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => Language::parse(code)?,
            _ => Language::default(),
        };

        if let Some(existing) = self.newsletter_repo.find_by_email(&email).await? {
            return Ok(already_subscribed(existing.email, existing.locale));
        }

        let new_subscriber = NewSubscriber {
            email: email.clone(),
            locale,
            subscribed_at: self.clock.now(),
        };

        let stored = match self.newsletter_repo.insert(new_subscriber).await {
            Ok(stored) => stored,
            // Lost a race with a concurrent request for the same address.
            Err(DomainError::Conflict(_)) => return Ok(already_subscribed(email, locale)),
            Err(err) => return Err(err.into()),
        };
        tracing::info!(locale = %stored.locale, "newsletter subscription added");

        self.notify_best_effort(Notification {
            subject: "New newsletter subscriber".into(),
            body: format!("{} subscribed (locale: {})", stored.email, stored.locale),
            reply_to: None,
        })
        .await;

        Ok(SubscriptionDto {
            email: stored.email.into_inner(),
            locale: stored.locale.as_str().to_string(),
            already_subscribed: false,
        })
    }
}

fn already_subscribed(email: EmailAddress, locale: Language) -> SubscriptionDto {
    SubscriptionDto {
        email: email.into_inner(),
        locale: locale.as_str().to_string(),
        already_subscribed: true,
    }
}
