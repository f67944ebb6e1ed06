use crate::domain::business::Business;
use crate::domain::content::format_content;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of an approved listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BusinessDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub category_slug: String,
    pub description: String,
    /// `description` rendered to HTML paragraphs and headings.
    pub description_html: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub languages: Vec<String>,
}

impl From<Business> for BusinessDto {
    fn from(business: Business) -> Self {
        Self {
            id: business.id.into(),
            description_html: format_content(Some(&business.description)),
            name: business.name,
            slug: business.slug.into_inner(),
            category: business.category,
            category_slug: business.category_slug,
            description: business.description,
            city: business.city,
            address: business.address,
            phone: business.phone.map(|p| p.as_str().to_string()),
            email: business.email.map(|e| e.into_inner()),
            website: business.website.map(|w| w.as_str().to_string()),
            languages: business
                .languages
                .iter()
                .map(|l| l.as_str().to_string())
                .collect(),
        }
    }
}

/// Moderation view, including the owner contact and review state.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminBusinessDto {
    #[serde(flatten)]
    pub listing: BusinessDto,
    pub owner_email: String,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderated_at: Option<DateTime<Utc>>,
}

impl From<Business> for AdminBusinessDto {
    fn from(business: Business) -> Self {
        let owner_email = business.owner_email.as_str().to_string();
        let status = business.status.as_str().to_string();
        let submitted_at = business.submitted_at;
        let moderated_at = business.moderated_at;
        Self {
            listing: business.into(),
            owner_email,
            status,
            submitted_at,
            moderated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BusinessSubmissionDto {
    pub id: i64,
    pub slug: String,
    pub status: String,
}

impl From<&Business> for BusinessSubmissionDto {
    fn from(business: &Business) -> Self {
        Self {
            id: business.id.into(),
            slug: business.slug.as_str().to_string(),
            status: business.status.as_str().to_string(),
        }
    }
}
