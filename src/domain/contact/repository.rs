use crate::domain::contact::entity::{ContactMessage, ContactMessageId, NewContactMessage};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage>;
    /// Newest first.
    async fn list(&self, unread_only: bool) -> DomainResult<Vec<ContactMessage>>;
    async fn mark_read(&self, id: ContactMessageId) -> DomainResult<ContactMessage>;
}
