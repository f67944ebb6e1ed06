// tests/support/mocks.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use ro_directory::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{
        notification::{Notification, Notifier},
        time::Clock,
    },
};
use ro_directory::domain::business::{
    Business, BusinessId, BusinessRepository, BusinessSlug, BusinessStatus, NewBusiness,
};
use ro_directory::domain::errors::DomainResult;
use ro_directory::infrastructure::repositories::InMemoryBusinessRepository;

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Keeps every notification it is asked to send.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: Notification) -> ApplicationResult<()> {
        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}

/// Simulates an unreachable email provider.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _notification: Notification) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("smtp unreachable"))
    }
}

/// Hands control back to the scheduler after every read, so two requests
/// joined on one task interleave between their read and their write.
#[derive(Default)]
pub struct YieldingBusinessRepository {
    inner: InMemoryBusinessRepository,
}

#[async_trait]
impl BusinessRepository for YieldingBusinessRepository {
    async fn insert(&self, business: NewBusiness) -> DomainResult<Business> {
        self.inner.insert(business).await
    }

    async fn update_if_status(
        &self,
        business: Business,
        expected: BusinessStatus,
    ) -> DomainResult<Business> {
        self.inner.update_if_status(business, expected).await
    }

    async fn find_by_id(&self, id: BusinessId) -> DomainResult<Option<Business>> {
        let found = self.inner.find_by_id(id).await;
        tokio::task::yield_now().await;
        found
    }

    async fn find_by_slug(&self, slug: &BusinessSlug) -> DomainResult<Option<Business>> {
        let found = self.inner.find_by_slug(slug).await;
        tokio::task::yield_now().await;
        found
    }

    async fn list(&self, status: Option<BusinessStatus>) -> DomainResult<Vec<Business>> {
        self.inner.list(status).await
    }
}
