// src/application/commands/moderation/inbox.rs
use super::ModerationService;
use crate::{
    application::{
        dto::{AdminActor, ContactMessageDto, SubscriberDto},
        error::ApplicationResult,
    },
    domain::contact::ContactMessageId,
};

impl ModerationService {
    pub async fn list_contact_messages(
        &self,
        _actor: &AdminActor,
        unread_only: bool,
    ) -> ApplicationResult<Vec<ContactMessageDto>> {
        let messages = self.contact_repo.list(unread_only).await?;
        Ok(messages.into_iter().map(ContactMessageDto::from).collect())
    }

    pub async fn mark_contact_read(
        &self,
        _actor: &AdminActor,
        id: i64,
    ) -> ApplicationResult<ContactMessageDto> {
        let message = self.contact_repo.mark_read(ContactMessageId(id)).await?;
        Ok(message.into())
    }

    pub async fn list_subscribers(
        &self,
        _actor: &AdminActor,
    ) -> ApplicationResult<Vec<SubscriberDto>> {
        let subscribers = self.newsletter_repo.list().await?;
        Ok(subscribers.into_iter().map(SubscriberDto::from).collect())
    }
}
