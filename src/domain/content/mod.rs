// src/domain/content/mod.rs
pub mod formatter;

pub use formatter::{ParagraphKind, classify_paragraph, format_content};
