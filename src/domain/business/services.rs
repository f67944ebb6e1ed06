// src/domain/business/services.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::business::repository::BusinessRepository;
use crate::domain::business::value_objects::BusinessSlug;
use crate::domain::errors::DomainResult;

/// Domain service responsible for producing unique slugs for listings.
pub struct BusinessSlugService {
    repo: Arc<dyn BusinessRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl BusinessSlugService {
    pub fn new(
        repo: Arc<dyn BusinessRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            generator,
            clock,
        }
    }

    pub async fn generate_unique_slug(&self, name: &str) -> DomainResult<BusinessSlug> {
        let base = self.generator.slugify(name);
        let base_slug = if base.is_empty() {
            format!("business-{}", self.clock.now().timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = BusinessSlug::new(candidate.clone())?;
            if self.repo.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
            candidate = format!("{base_slug}-{counter}");
            counter += 1;
        }
    }
}
