// src/application/queries/directory/businesses.rs
use super::DirectoryQueryService;
use crate::{
    application::{
        dto::BusinessDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        business::{BusinessSlug, BusinessStatus},
        category::category_matches_slug,
    },
};

impl DirectoryQueryService {
    /// Approved listings whose stored category belongs under `slug`, by name.
    pub async fn list_businesses_in_category(
        &self,
        slug: &str,
    ) -> ApplicationResult<Vec<BusinessDto>> {
        let approved = self
            .business_repo
            .list(Some(BusinessStatus::Approved))
            .await?;

        let mut matching: Vec<BusinessDto> = approved
            .into_iter()
            .filter(|business| category_matches_slug(&business.category, Some(slug)))
            .map(BusinessDto::from)
            .collect();
        matching.sort_by_key(|business| business.name.to_lowercase());

        tracing::debug!(slug, count = matching.len(), "category listing");
        Ok(matching)
    }

    pub async fn get_business(&self, slug: &str) -> ApplicationResult<BusinessDto> {
        let slug = BusinessSlug::new(slug)?;
        match self.business_repo.find_by_slug(&slug).await? {
            Some(business) if business.is_public() => Ok(business.into()),
            _ => Err(ApplicationError::not_found("business not found")),
        }
    }
}
