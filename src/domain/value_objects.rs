// src/domain/value_objects.rs
//! Value objects shared by several submission types.
use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

const EMAIL_MAX_LEN: usize = 254;

/// Trim `value` and check its length in characters against `min..=max`.
pub fn bounded_text(
    field: &str,
    value: impl Into<String>,
    min: usize,
    max: usize,
) -> DomainResult<String> {
    let value = value.into();
    let trimmed = value.trim();
    let len = trimmed.chars().count();

    if len == 0 && min > 0 {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    if len < min {
        return Err(DomainError::Validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    if len > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Like [`bounded_text`], but blank input becomes `None`.
pub fn optional_text(
    field: &str,
    value: Option<String>,
    max: usize,
) -> DomainResult<Option<String>> {
    match value {
        Some(v) if !v.trim().is_empty() => bounded_text(field, v, 1, max).map(Some),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("email is required".into()));
        }
        if trimmed.len() > EMAIL_MAX_LEN || !EMAIL_PATTERN.is_match(trimmed) {
            return Err(DomainError::Validation("email address is invalid".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Lowercased form used for deduplication.
    pub fn normalized(&self) -> Self {
        Self(self.0.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Languages a listing can be served in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    #[default]
    Romanian,
    English,
    Spanish,
}

impl Language {
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "ro" => Ok(Self::Romanian),
            "en" => Ok(Self::English),
            "es" => Ok(Self::Spanish),
            other => Err(DomainError::Validation(format!(
                "unsupported language: {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Romanian => "ro",
            Self::English => "en",
            Self::Spanish => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_text_trims_and_counts_chars() {
        assert_eq!(bounded_text("name", "  Ană  ", 1, 3).unwrap(), "Ană");
        assert!(bounded_text("name", "Ioana", 1, 3).is_err());
        assert!(bounded_text("message", "short", 10, 100).is_err());
    }

    #[test]
    fn blank_required_text_reports_required() {
        let err = bounded_text("name", "   ", 1, 10).unwrap_err();
        assert_eq!(err.to_string(), "validation error: name is required");
    }

    #[test]
    fn optional_text_treats_blank_as_absent() {
        assert_eq!(optional_text("subject", Some("  ".into()), 10).unwrap(), None);
        assert_eq!(optional_text("subject", None, 10).unwrap(), None);
        assert_eq!(
            optional_text("subject", Some(" Hi ".into()), 10).unwrap(),
            Some("Hi".into())
        );
        assert!(optional_text("subject", Some("x".repeat(11)), 10).is_err());
    }

    #[test]
    fn email_validation() {
        assert_eq!(
            EmailAddress::new(" Maria@Example.ro ").unwrap().as_str(),
            "Maria@Example.ro"
        );
        assert!(EmailAddress::new("").is_err());
        assert!(EmailAddress::new("no-at-sign.ro").is_err());
        assert!(EmailAddress::new("a@b").is_err());
        assert!(EmailAddress::new("a b@c.ro").is_err());
        assert!(EmailAddress::new(format!("{}@x.ro", "a".repeat(260))).is_err());
    }

    #[test]
    fn email_normalization_lowercases() {
        let email = EmailAddress::new("Maria@Example.RO").unwrap();
        assert_eq!(email.normalized().as_str(), "maria@example.ro");
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::parse("RO").unwrap(), Language::Romanian);
        assert_eq!(Language::parse(" es").unwrap().as_str(), "es");
        assert!(Language::parse("de").is_err());
        assert_eq!(Language::default(), Language::Romanian);
    }
}
