use crate::domain::contact::ContactMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactMessageDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub read: bool,
    pub received_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactMessageDto {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id.into(),
            name: message.name,
            email: message.email.into_inner(),
            subject: message.subject,
            message: message.message,
            read: message.read,
            received_at: message.received_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactReceiptDto {
    pub id: i64,
    pub received_at: DateTime<Utc>,
}

impl From<&ContactMessage> for ContactReceiptDto {
    fn from(message: &ContactMessage) -> Self {
        Self {
            id: message.id.into(),
            received_at: message.received_at,
        }
    }
}
