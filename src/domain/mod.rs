// src/domain/mod.rs
pub mod business;
pub mod category;
pub mod contact;
pub mod content;
pub mod errors;
pub mod newsletter;
pub mod value_objects;
