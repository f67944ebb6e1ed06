// src/application/commands/moderation/mod.rs
mod businesses;
mod inbox;
mod service;

pub use businesses::{ListBusinessesQuery, ModerateBusinessCommand, ModerationDecision};
pub use service::ModerationService;
