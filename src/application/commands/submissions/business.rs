// src/application/commands/submissions/business.rs
use super::{
    SubmissionCommandService,
    rate_limit::{BUSINESS_POLICY, enforce},
};
use crate::{
    application::{
        dto::BusinessSubmissionDto,
        error::{ApplicationError, ApplicationResult},
        ports::notification::Notification,
    },
    domain::{
        business::{Business, NewBusiness, PhoneNumber, WebsiteUrl},
        category::category_to_slug,
        errors::DomainError,
        value_objects::{EmailAddress, Language, bounded_text, optional_text},
    },
};

#[derive(Debug, Clone, Default)]
pub struct SubmitBusinessCommand {
    pub name: String,
    pub category: String,
    pub description: String,
    pub city: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub languages: Vec<String>,
    pub owner_email: String,
}

impl SubmitBusinessCommand {
    pub fn builder() -> SubmitBusinessCommandBuilder {
        SubmitBusinessCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct SubmitBusinessCommandBuilder {
    name: Option<String>,
    category: Option<String>,
    description: Option<String>,
    city: Option<String>,
    owner_email: Option<String>,
    optional: SubmitBusinessCommand,
}

impl SubmitBusinessCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner_email(mut self, owner_email: impl Into<String>) -> Self {
        self.owner_email = Some(owner_email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.optional.address = Some(address.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.optional.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.optional.email = Some(email.into());
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.optional.website = Some(website.into());
        self
    }

    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.optional.languages.push(code.into());
        self
    }

    pub fn build(self) -> Result<SubmitBusinessCommand, &'static str> {
        Ok(SubmitBusinessCommand {
            name: self.name.ok_or("name is required")?,
            category: self.category.ok_or("category is required")?,
            description: self.description.ok_or("description is required")?,
            city: self.city.ok_or("city is required")?,
            owner_email: self.owner_email.ok_or("owner_email is required")?,
            ..self.optional
        })
    }
}

fn parse_languages(codes: &[String]) -> ApplicationResult<Vec<Language>> {
    let mut languages = Vec::new();
    for code in codes {
        let language = Language::parse(code)?;
        if !languages.contains(&language) {
            languages.push(language);
        }
    }
    if languages.is_empty() {
        languages.push(Language::default());
    }
    Ok(languages)
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Slug picks that may lose a race with a concurrent submission of the same
/// name before the submission is reported as a conflict.
const SLUG_INSERT_ATTEMPTS: usize = 5;

impl SubmissionCommandService {
    async fn insert_with_fresh_slug(
        &self,
        new_business: &mut NewBusiness,
    ) -> ApplicationResult<Business> {
        let mut attempt = 1;
        loop {
            match self.business_repo.insert(new_business.clone()).await {
                Err(DomainError::Conflict(_)) if attempt < SLUG_INSERT_ATTEMPTS => {
                    tracing::debug!(slug = %new_business.slug, attempt, "slug taken, picking another");
                    new_business.slug = self
                        .slug_service
                        .generate_unique_slug(&new_business.name)
                        .await?;
                    attempt += 1;
                }
                result => return Ok(result?),
            }
        }
    }

    /// Store a new listing as `pending`; it stays hidden until a moderator
    /// approves it.
    pub async fn submit_business(
        &self,
        client_key: &str,
        command: SubmitBusinessCommand,
    ) -> ApplicationResult<BusinessSubmissionDto> {
        enforce(self.rate_limiter.as_ref(), &BUSINESS_POLICY, client_key)?;

        let name = bounded_text("name", command.name, 2, 150)?;
        let category = bounded_text("category", command.category, 1, 100)?;
        let category_slug = category_to_slug(&category);
        if category_slug.trim_matches('-').is_empty() {
            return Err(ApplicationError::validation("category is invalid"));
        }

        let mut new_business = NewBusiness {
            slug: self.slug_service.generate_unique_slug(&name).await?,
            name,
            category,
            category_slug,
            description: bounded_text("description", command.description, 20, 5000)?,
            city: bounded_text("city", command.city, 1, 100)?,
            address: optional_text("address", command.address, 250)?,
            phone: blank_to_none(command.phone).map(PhoneNumber::new).transpose()?,
            email: blank_to_none(command.email)
                .map(EmailAddress::new)
                .transpose()?,
            website: blank_to_none(command.website)
                .map(WebsiteUrl::new)
                .transpose()?,
            languages: parse_languages(&command.languages)?,
            owner_email: EmailAddress::new(command.owner_email)?,
            submitted_at: self.clock.now(),
        };

        let stored = self.insert_with_fresh_slug(&mut new_business).await?;
        tracing::info!(
            business_id = stored.id.0,
            slug = %stored.slug,
            category = %stored.category,
            "business submitted for review"
        );

        self.notify_best_effort(Notification {
            subject: format!("New business listing: {}", stored.name),
            body: format!(
                "{} ({}, {}) is waiting for review.\nOwner: {}",
                stored.name, stored.category, stored.city, stored.owner_email
            ),
            reply_to: Some(stored.owner_email.as_str().to_string()),
        })
        .await;

        Ok(BusinessSubmissionDto::from(&stored))
    }
}
