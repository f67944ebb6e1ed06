use super::DirectoryQueryService;
use crate::{application::dto::CategoryDto, domain::category::canonical_categories};

impl DirectoryQueryService {
    pub fn list_categories(&self) -> Vec<CategoryDto> {
        canonical_categories()
            .into_iter()
            .map(CategoryDto::from_name)
            .collect()
    }

    /// Never fails: unknown slugs get a title-cased name.
    pub fn resolve_category(&self, slug: &str) -> CategoryDto {
        CategoryDto::from_slug(slug)
    }
}
