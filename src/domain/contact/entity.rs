// src/domain/contact/entity.rs
use crate::domain::value_objects::EmailAddress;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactMessageId(pub i64);

impl From<ContactMessageId> for i64 {
    fn from(value: ContactMessageId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: EmailAddress,
    pub subject: Option<String>,
    pub message: String,
    pub read: bool,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: EmailAddress,
    pub subject: Option<String>,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl NewContactMessage {
    pub fn into_message(self, id: ContactMessageId) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            read: false,
            received_at: self.received_at,
        }
    }
}
