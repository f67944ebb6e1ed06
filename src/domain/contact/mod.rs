pub mod entity;
pub mod repository;

pub use entity::{ContactMessage, ContactMessageId, NewContactMessage};
pub use repository::ContactMessageRepository;
