use crate::domain::value_objects::{EmailAddress, Language};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Subscriber {
    pub id: i64,
    pub email: EmailAddress,
    pub locale: Language,
    pub subscribed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSubscriber {
    /// Already normalised to lowercase.
    pub email: EmailAddress,
    pub locale: Language,
    pub subscribed_at: DateTime<Utc>,
}
