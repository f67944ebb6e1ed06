// src/infrastructure/repositories/mod.rs
mod memory_business;
mod memory_contact;
mod memory_newsletter;

pub use memory_business::InMemoryBusinessRepository;
pub use memory_contact::InMemoryContactMessageRepository;
pub use memory_newsletter::InMemoryNewsletterRepository;
