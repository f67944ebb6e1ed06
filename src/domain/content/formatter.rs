// src/domain/content/formatter.rs
//! Plain-text to HTML conversion for stored description and resource bodies.
//!
//! Paragraphs are separated by a blank line (`"\n\n"`). Each surviving
//! paragraph becomes exactly one top-level `<h2>`, `<h3>` or `<p>` element,
//! in input order. Content is passed through without escaping.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.\s+").expect("numbered header pattern"));
static LETTERED_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]\.\s+").expect("lettered header pattern"));

/// Colon headers must be strictly shorter than this many UTF-16 code units,
/// colon included.
const COLON_HEADER_MAX_LEN: usize = 100;

/// Byte-order mark, stripped along with whitespace around each paragraph.
const BOM: char = '\u{feff}';

const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphKind {
    /// `1. Title` → `<h2>`
    NumberedHeader,
    /// `A. Title` → `<h3>`
    LetteredHeader,
    /// `Short line:` → `<h3>`
    ColonHeader,
    Paragraph,
}

struct Rule {
    kind: ParagraphKind,
    matches: fn(&str) -> bool,
    render: fn(&str) -> String,
}

// Evaluated top to bottom, first match wins.
static RULES: [Rule; 4] = [
    Rule {
        kind: ParagraphKind::NumberedHeader,
        matches: |p| NUMBERED_HEADER.is_match(p),
        render: |p| wrap("h2", &NUMBERED_HEADER.replace(p, "")),
    },
    Rule {
        kind: ParagraphKind::LetteredHeader,
        matches: |p| LETTERED_HEADER.is_match(p),
        render: |p| wrap("h3", &LETTERED_HEADER.replace(p, "")),
    },
    Rule {
        kind: ParagraphKind::ColonHeader,
        matches: is_colon_header,
        render: |p| wrap("h3", p.strip_suffix(':').unwrap_or(p)),
    },
    Rule {
        kind: ParagraphKind::Paragraph,
        matches: |_| true,
        render: |p| wrap("p", &p.replace('\n', "<br>")),
    },
];

fn is_colon_header(paragraph: &str) -> bool {
    paragraph.ends_with(':') && paragraph.encode_utf16().count() < COLON_HEADER_MAX_LEN
}

fn trim_paragraph(paragraph: &str) -> &str {
    paragraph.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

fn wrap(tag: &str, inner: &str) -> String {
    format!("<{tag}>{inner}</{tag}>")
}

fn rule_for(paragraph: &str) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.matches)(paragraph))
        .unwrap_or(&RULES[RULES.len() - 1])
}

/// Classify an already trimmed, non-empty paragraph.
pub fn classify_paragraph(paragraph: &str) -> ParagraphKind {
    rule_for(paragraph).kind
}

/// Convert a stored plain-text body into an HTML fragment.
///
/// Returns an empty string for `None`, empty input, or input made only of
/// blank paragraphs.
pub fn format_content(text: Option<&str>) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return String::new();
    };

    text.split(PARAGRAPH_SEPARATOR)
        .map(trim_paragraph)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| (rule_for(paragraph).render)(paragraph))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_input_yields_empty_string() {
        assert_eq!(format_content(None), "");
        assert_eq!(format_content(Some("")), "");
        assert_eq!(format_content(Some("\n\n\n\n")), "");
        assert_eq!(format_content(Some("   \n\n  \t ")), "");
    }

    #[test]
    fn numbered_header_followed_by_paragraph() {
        assert_eq!(
            format_content(Some("1. Title\n\nBody text.")),
            "<h2>Title</h2>\n<p>Body text.</p>"
        );
    }

    #[test]
    fn multi_digit_numbered_header() {
        assert_eq!(format_content(Some("12.  Twelfth")), "<h2>Twelfth</h2>");
    }

    #[test]
    fn lettered_header_becomes_h3() {
        assert_eq!(
            format_content(Some("A. Sub\n\nBody.")),
            "<h3>Sub</h3>\n<p>Body.</p>"
        );
    }

    #[test]
    fn lowercase_letter_is_not_a_header() {
        assert_eq!(format_content(Some("a. not a header")), "<p>a. not a header</p>");
    }

    #[test]
    fn colon_header_strips_colon() {
        assert_eq!(
            format_content(Some("Note:\n\nDetail.")),
            "<h3>Note</h3>\n<p>Detail.</p>"
        );
    }

    #[test]
    fn colon_header_length_threshold_counts_colon() {
        let just_under = format!("{}:", "x".repeat(98));
        assert_eq!(just_under.len(), 99);
        assert_eq!(classify_paragraph(&just_under), ParagraphKind::ColonHeader);

        let at_limit = format!("{}:", "x".repeat(99));
        assert_eq!(classify_paragraph(&at_limit), ParagraphKind::Paragraph);
        assert_eq!(format_content(Some(&at_limit)), format!("<p>{at_limit}</p>"));
    }

    #[test]
    fn numbered_rule_wins_over_colon_rule() {
        assert_eq!(classify_paragraph("2. Contact:"), ParagraphKind::NumberedHeader);
        assert_eq!(format_content(Some("2. Contact:")), "<h2>Contact:</h2>");
    }

    #[test]
    fn lettered_rule_wins_over_colon_rule() {
        assert_eq!(format_content(Some("B. Hours:")), "<h3>Hours:</h3>");
    }

    #[test]
    fn single_newlines_become_line_breaks() {
        assert_eq!(
            format_content(Some("Line one\nLine two")),
            "<p>Line one<br>Line two</p>"
        );
    }

    #[test]
    fn header_requires_whitespace_after_period() {
        assert_eq!(format_content(Some("3.14 is pi")), "<p>3.14 is pi</p>");
    }

    #[test]
    fn whitespace_only_paragraph_is_dropped() {
        assert_eq!(
            format_content(Some("First.\n\n   \n\nSecond.")),
            "<p>First.</p>\n<p>Second.</p>"
        );
    }

    #[test]
    fn extra_blank_lines_do_not_produce_empty_tags() {
        assert_eq!(
            format_content(Some("First.\n\n\n\n\nSecond.")),
            "<p>First.</p>\n<p>Second.</p>"
        );
    }

    #[test]
    fn paragraphs_are_trimmed_and_order_is_kept() {
        let text = "  Intro text  \n\n1. Services\n\nA. Repairs\n\nOpening hours:\n\nMon-Fri\n9-17";
        assert_eq!(
            format_content(Some(text)),
            "<p>Intro text</p>\n<h2>Services</h2>\n<h3>Repairs</h3>\n<h3>Opening hours</h3>\n<p>Mon-Fri<br>9-17</p>"
        );
    }

    #[test]
    fn markup_is_passed_through_unescaped() {
        assert_eq!(
            format_content(Some("<b>bold</b> & more")),
            "<p><b>bold</b> & more</p>"
        );
    }

    #[test]
    fn colon_header_length_counts_utf16_units() {
        let fits = format!("{}:", "😀".repeat(49));
        assert_eq!(classify_paragraph(&fits), ParagraphKind::ColonHeader);

        let too_long = format!("{}:", "😀".repeat(50));
        assert_eq!(too_long.chars().count(), 51);
        assert_eq!(classify_paragraph(&too_long), ParagraphKind::Paragraph);

        let diacritics = format!("{}:", "ă".repeat(98));
        assert_eq!(classify_paragraph(&diacritics), ParagraphKind::ColonHeader);
    }

    #[test]
    fn byte_order_mark_is_trimmed_like_whitespace() {
        assert_eq!(
            format_content(Some("\u{feff}1. Despre noi\n\nText.\u{feff}")),
            "<h2>Despre noi</h2>\n<p>Text.</p>"
        );
        assert_eq!(format_content(Some("\u{feff}")), "");
    }
}
