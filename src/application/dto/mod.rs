pub mod auth;
pub mod businesses;
pub mod categories;
pub mod contact;
pub mod newsletter;

pub use auth::AdminActor;
pub use businesses::{AdminBusinessDto, BusinessDto, BusinessSubmissionDto};
pub use categories::CategoryDto;
pub use contact::{ContactMessageDto, ContactReceiptDto};
pub use newsletter::{SubscriberDto, SubscriptionDto};
