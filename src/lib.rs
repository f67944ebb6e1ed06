//! Backend for a directory of Romanian-owned businesses: category slugs,
//! description formatting, rate-limited public submissions and moderation.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
