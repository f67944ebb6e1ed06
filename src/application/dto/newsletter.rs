use crate::domain::newsletter::Subscriber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    pub email: String,
    pub locale: String,
    pub already_subscribed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriberDto {
    pub email: String,
    pub locale: String,
    pub subscribed_at: DateTime<Utc>,
}

impl From<Subscriber> for SubscriberDto {
    fn from(subscriber: Subscriber) -> Self {
        Self {
            email: subscriber.email.into_inner(),
            locale: subscriber.locale.as_str().to_string(),
            subscribed_at: subscriber.subscribed_at,
        }
    }
}
