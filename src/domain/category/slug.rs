// src/domain/category/slug.rs
//! Category names, URL slugs and the alias table tying them together.
//!
//! The mapping is many-to-one: several slugs resolve to the same canonical
//! display name, and business records may carry singular or otherwise drifted
//! spellings of a category. Every function here is total.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Known slug → canonical category name pairs.
pub static CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("car-service", "Car Services"),
    ("car-services", "Car Services"),
    ("restaurant", "Restaurant & Food"),
    ("restaurant-food", "Restaurant & Food"),
    ("bakery", "Bakery"),
    ("grocery", "Grocery"),
    ("beauty-salon", "Beauty & Wellness"),
    ("beauty-wellness", "Beauty & Wellness"),
    ("construction", "Construction"),
    ("transport", "Transportation"),
    ("transportation", "Transportation"),
    ("travel-tourism", "Travel & Tourism"),
    ("retail", "Retail"),
    ("professional-services", "Professional Services"),
    ("photo-video", "Photo & Video"),
    ("other", "Other"),
    ("other-services", "Professional Services"),
    ("it-marketing", "IT & Marketing"),
    ("cosmetician", "Cosmetician"),
];

/// Canonical name registered for an already normalised slug.
pub fn canonical_for_slug(slug: &str) -> Option<&'static str> {
    CATEGORY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == slug)
        .map(|(_, canonical)| *canonical)
}

/// Distinct canonical names, in table order.
pub fn canonical_categories() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for (_, canonical) in CATEGORY_ALIASES {
        if !names.contains(canonical) {
            names.push(*canonical);
        }
    }
    names
}

/// `"Beauty & Wellness"` → `"beauty-wellness"`.
///
/// Ampersands are deleted before whitespace is collapsed, so the two spaces
/// they leave behind become a single hyphen.
pub fn category_to_slug(category: &str) -> String {
    let lowered = category.to_lowercase().replace('&', "");
    WHITESPACE_RUN
        .replace_all(&lowered, "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Display name for a slug: the alias table first, then a title-cased
/// reconstruction of the hyphen segments.
pub fn slug_to_category(slug: Option<&str>) -> String {
    let normalized = slug.unwrap_or_default().to_lowercase().trim().to_string();

    if let Some(canonical) = canonical_for_slug(&normalized) {
        return canonical.to_string();
    }

    normalized
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether a stored category value belongs on the page for `slug`.
///
/// Matches on the derived slug, then on the alias table's canonical name,
/// tolerating a single trailing `s` on the canonical side. Values such as
/// `"Beauty Salon"` only match their own derived slug, not the alias that
/// points at `"Beauty & Wellness"`.
pub fn category_matches_slug(category: &str, slug: Option<&str>) -> bool {
    let normalized = slug.unwrap_or_default().to_lowercase();

    if category_to_slug(category) == normalized {
        return true;
    }

    let Some(canonical) = canonical_for_slug(&normalized) else {
        return false;
    };

    category == canonical || category == canonical.strip_suffix('s').unwrap_or(canonical).trim()
}
