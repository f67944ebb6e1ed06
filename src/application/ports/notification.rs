// src/application/ports/notification.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// An email addressed to the site administrators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
    pub reply_to: Option<String>,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification) -> ApplicationResult<()>;
}
