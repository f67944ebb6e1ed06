// src/application/commands/submissions/mod.rs
mod business;
mod contact;
mod newsletter;
mod rate_limit;
mod service;

pub use business::SubmitBusinessCommand;
pub use contact::SubmitContactCommand;
pub use newsletter::SubscribeNewsletterCommand;
pub use rate_limit::{BUSINESS_POLICY, CONTACT_POLICY, NEWSLETTER_POLICY};
pub use service::SubmissionCommandService;
