use crate::domain::category::{category_to_slug, slug_to_category};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub slug: String,
    pub name: String,
}

impl CategoryDto {
    pub fn from_name(name: &str) -> Self {
        Self {
            slug: category_to_slug(name),
            name: name.to_string(),
        }
    }

    pub fn from_slug(slug: &str) -> Self {
        Self {
            slug: slug.trim().to_lowercase(),
            name: slug_to_category(Some(slug)),
        }
    }
}
