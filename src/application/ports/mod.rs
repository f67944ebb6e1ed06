// src/application/ports/mod.rs
pub mod notification;
pub mod rate_limit;
pub mod security;
pub mod time;
pub mod util;
