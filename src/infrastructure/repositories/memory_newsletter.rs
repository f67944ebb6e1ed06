use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::newsletter::{NewSubscriber, NewsletterRepository, Subscriber};
use crate::domain::value_objects::EmailAddress;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: Vec<Subscriber>,
}

#[derive(Default)]
pub struct InMemoryNewsletterRepository {
    store: RwLock<Store>,
}

impl InMemoryNewsletterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NewsletterRepository for InMemoryNewsletterRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Subscriber>> {
        let store = self.store.read().await;
        Ok(store.rows.iter().find(|row| &row.email == email).cloned())
    }

    async fn insert(&self, subscriber: NewSubscriber) -> DomainResult<Subscriber> {
        let mut store = self.store.write().await;
        if store.rows.iter().any(|row| row.email == subscriber.email) {
            return Err(DomainError::Conflict("already subscribed".into()));
        }

        store.next_id += 1;
        let created = Subscriber {
            id: store.next_id,
            email: subscriber.email,
            locale: subscriber.locale,
            subscribed_at: subscriber.subscribed_at,
        };
        store.rows.push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> DomainResult<Vec<Subscriber>> {
        Ok(self.store.read().await.rows.clone())
    }
}
