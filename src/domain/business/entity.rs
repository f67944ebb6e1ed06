// src/domain/business/entity.rs
use crate::domain::business::value_objects::{
    BusinessId, BusinessSlug, BusinessStatus, PhoneNumber, WebsiteUrl,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{EmailAddress, Language};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub slug: BusinessSlug,
    pub category: String,
    pub category_slug: String,
    pub description: String,
    pub city: String,
    pub address: Option<String>,
    pub phone: Option<PhoneNumber>,
    pub email: Option<EmailAddress>,
    pub website: Option<WebsiteUrl>,
    pub languages: Vec<Language>,
    pub owner_email: EmailAddress,
    pub status: BusinessStatus,
    pub submitted_at: DateTime<Utc>,
    pub moderated_at: Option<DateTime<Utc>>,
}

impl Business {
    pub fn is_public(&self) -> bool {
        self.status == BusinessStatus::Approved
    }

    pub fn approve(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.transition(BusinessStatus::Approved, now)
    }

    pub fn reject(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.transition(BusinessStatus::Rejected, now)
    }

    fn transition(&mut self, to: BusinessStatus, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status != BusinessStatus::Pending {
            return Err(DomainError::Conflict(format!(
                "business is already {}",
                self.status
            )));
        }
        self.status = to;
        self.moderated_at = Some(now);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewBusiness {
    pub name: String,
    pub slug: BusinessSlug,
    pub category: String,
    pub category_slug: String,
    pub description: String,
    pub city: String,
    pub address: Option<String>,
    pub phone: Option<PhoneNumber>,
    pub email: Option<EmailAddress>,
    pub website: Option<WebsiteUrl>,
    pub languages: Vec<Language>,
    pub owner_email: EmailAddress,
    pub submitted_at: DateTime<Utc>,
}

impl NewBusiness {
    /// Materialise a stored, pending listing under `id`.
    pub fn into_business(self, id: BusinessId) -> Business {
        Business {
            id,
            name: self.name,
            slug: self.slug,
            category: self.category,
            category_slug: self.category_slug,
            description: self.description,
            city: self.city,
            address: self.address,
            phone: self.phone,
            email: self.email,
            website: self.website,
            languages: self.languages,
            owner_email: self.owner_email,
            status: BusinessStatus::Pending,
            submitted_at: self.submitted_at,
            moderated_at: None,
        }
    }
}
