use crate::domain::errors::DomainResult;
use crate::domain::newsletter::entity::{NewSubscriber, Subscriber};
use crate::domain::value_objects::EmailAddress;
use async_trait::async_trait;

#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Subscriber>>;
    /// Fails with `Conflict` when the address is already subscribed.
    async fn insert(&self, subscriber: NewSubscriber) -> DomainResult<Subscriber>;
    async fn list(&self) -> DomainResult<Vec<Subscriber>>;
}
