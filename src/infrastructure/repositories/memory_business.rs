// src/infrastructure/repositories/memory_business.rs
use crate::domain::business::{
    Business, BusinessId, BusinessRepository, BusinessSlug, BusinessStatus, NewBusiness,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: Vec<Business>,
}

/// Process-local listing store. Rows are kept in insertion order.
#[derive(Default)]
pub struct InMemoryBusinessRepository {
    store: RwLock<Store>,
}

impl InMemoryBusinessRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BusinessRepository for InMemoryBusinessRepository {
    async fn insert(&self, business: NewBusiness) -> DomainResult<Business> {
        let mut store = self.store.write().await;
        if store.rows.iter().any(|row| row.slug == business.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        store.next_id += 1;
        let created = business.into_business(BusinessId(store.next_id));
        store.rows.push(created.clone());
        Ok(created)
    }

    async fn update_if_status(
        &self,
        business: Business,
        expected: BusinessStatus,
    ) -> DomainResult<Business> {
        let mut store = self.store.write().await;
        let row = store
            .rows
            .iter_mut()
            .find(|row| row.id == business.id)
            .ok_or_else(|| DomainError::NotFound("business not found".into()))?;
        if row.status != expected {
            return Err(DomainError::Conflict(format!(
                "business is already {}",
                row.status
            )));
        }
        *row = business.clone();
        Ok(business)
    }

    async fn find_by_id(&self, id: BusinessId) -> DomainResult<Option<Business>> {
        let store = self.store.read().await;
        Ok(store.rows.iter().find(|row| row.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &BusinessSlug) -> DomainResult<Option<Business>> {
        let store = self.store.read().await;
        Ok(store.rows.iter().find(|row| &row.slug == slug).cloned())
    }

    async fn list(&self, status: Option<BusinessStatus>) -> DomainResult<Vec<Business>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .iter()
            .filter(|row| status.is_none_or(|s| row.status == s))
            .cloned()
            .collect())
    }
}
