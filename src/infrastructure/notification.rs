// src/infrastructure/notification.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::notification::{Notification, Notifier},
};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Writes notifications to the log instead of sending them. Used when no
/// email provider is configured.
#[derive(Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: Notification) -> ApplicationResult<()> {
        tracing::info!(
            subject = %notification.subject,
            reply_to = notification.reply_to.as_deref().unwrap_or("-"),
            "notification (email delivery disabled)"
        );
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct EmailSettings {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
    pub to: String,
}

/// Sends notifications through a transactional email HTTP API
/// (`POST {api_url}` with a bearer key and a JSON message).
pub struct HttpEmailNotifier {
    client: reqwest::Client,
    settings: EmailSettings,
}

#[derive(Serialize)]
struct EmailPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

impl HttpEmailNotifier {
    pub fn new(settings: EmailSettings) -> ApplicationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { client, settings })
    }
}

#[async_trait]
impl Notifier for HttpEmailNotifier {
    async fn notify(&self, notification: Notification) -> ApplicationResult<()> {
        let payload = EmailPayload {
            from: &self.settings.from,
            to: [self.settings.to.as_str()],
            subject: &notification.subject,
            text: &notification.body,
            reply_to: notification.reply_to.as_deref(),
        };

        let response = self
            .client
            .post(&self.settings.api_url)
            .bearer_auth(&self.settings.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("email request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApplicationError::infrastructure(format!(
                "email provider responded with {status}"
            )));
        }

        tracing::debug!(subject = %notification.subject, "notification email sent");
        Ok(())
    }
}
