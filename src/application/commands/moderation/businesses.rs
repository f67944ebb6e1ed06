// src/application/commands/moderation/businesses.rs
use super::ModerationService;
use crate::{
    application::{
        dto::{AdminActor, AdminBusinessDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::business::{BusinessId, BusinessStatus},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationDecision {
    Approve,
    Reject,
}

impl ModerationDecision {
    pub fn parse(value: &str) -> ApplicationResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            other => Err(ApplicationError::validation(format!(
                "decision must be approve or reject, got {other}"
            ))),
        }
    }
}

pub struct ModerateBusinessCommand {
    pub id: i64,
    pub decision: ModerationDecision,
}

#[derive(Debug, Default)]
pub struct ListBusinessesQuery {
    pub status: Option<String>,
}

impl ModerationService {
    pub async fn list_businesses(
        &self,
        _actor: &AdminActor,
        query: ListBusinessesQuery,
    ) -> ApplicationResult<Vec<AdminBusinessDto>> {
        let status = query
            .status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(BusinessStatus::parse)
            .transpose()?;

        let listings = self.business_repo.list(status).await?;
        Ok(listings.into_iter().map(AdminBusinessDto::from).collect())
    }

    pub async fn moderate_business(
        &self,
        _actor: &AdminActor,
        command: ModerateBusinessCommand,
    ) -> ApplicationResult<AdminBusinessDto> {
        let id = BusinessId::new(command.id)?;
        let mut business = self
            .business_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("business not found"))?;

        let previous = business.status;
        let now = self.clock.now();
        match command.decision {
            ModerationDecision::Approve => business.approve(now)?,
            ModerationDecision::Reject => business.reject(now)?,
        }

        // A concurrent decision may have landed since the read above.
        let updated = self
            .business_repo
            .update_if_status(business, previous)
            .await?;
        tracing::info!(
            business_id = updated.id.0,
            status = %updated.status,
            "business moderated"
        );
        Ok(updated.into())
    }
}
