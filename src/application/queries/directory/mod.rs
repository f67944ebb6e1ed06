// src/application/queries/directory/mod.rs
mod businesses;
mod categories;
mod service;

pub use service::DirectoryQueryService;
