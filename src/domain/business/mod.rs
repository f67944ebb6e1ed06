pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Business, NewBusiness};
pub use repository::BusinessRepository;
pub use value_objects::{BusinessId, BusinessSlug, BusinessStatus, PhoneNumber, WebsiteUrl};
