use crate::domain::business::entity::{Business, NewBusiness};
use crate::domain::business::value_objects::{BusinessId, BusinessSlug, BusinessStatus};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait BusinessRepository: Send + Sync {
    async fn insert(&self, business: NewBusiness) -> DomainResult<Business>;
    /// Replace the stored row only while its status is still `expected`;
    /// otherwise fails with `Conflict` and leaves the row untouched.
    async fn update_if_status(
        &self,
        business: Business,
        expected: BusinessStatus,
    ) -> DomainResult<Business>;
    async fn find_by_id(&self, id: BusinessId) -> DomainResult<Option<Business>>;
    async fn find_by_slug(&self, slug: &BusinessSlug) -> DomainResult<Option<Business>>;
    /// All listings, optionally restricted to one status, oldest first.
    async fn list(&self, status: Option<BusinessStatus>) -> DomainResult<Vec<Business>>;
}
