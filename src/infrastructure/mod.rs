pub mod notification;
pub mod rate_limit;
pub mod repositories;
pub mod security;
pub mod time;
pub mod util;
