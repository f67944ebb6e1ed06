// src/domain/category/mod.rs
pub mod slug;

pub use slug::{
    CATEGORY_ALIASES, canonical_categories, canonical_for_slug, category_matches_slug,
    category_to_slug, slug_to_category,
};
