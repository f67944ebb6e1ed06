use crate::domain::contact::{
    ContactMessage, ContactMessageId, ContactMessageRepository, NewContactMessage,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: Vec<ContactMessage>,
}

#[derive(Default)]
pub struct InMemoryContactMessageRepository {
    store: RwLock<Store>,
}

impl InMemoryContactMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessageRepository {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let created = message.into_message(ContactMessageId(store.next_id));
        store.rows.push(created.clone());
        Ok(created)
    }

    async fn list(&self, unread_only: bool) -> DomainResult<Vec<ContactMessage>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .iter()
            .rev()
            .filter(|row| !unread_only || !row.read)
            .cloned()
            .collect())
    }

    async fn mark_read(&self, id: ContactMessageId) -> DomainResult<ContactMessage> {
        let mut store = self.store.write().await;
        let row = store
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::NotFound("contact message not found".into()))?;
        row.read = true;
        Ok(row.clone())
    }
}
