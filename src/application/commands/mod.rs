pub mod moderation;
pub mod submissions;
