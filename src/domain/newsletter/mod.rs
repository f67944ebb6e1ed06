pub mod entity;
pub mod repository;

pub use entity::{NewSubscriber, Subscriber};
pub use repository::NewsletterRepository;
