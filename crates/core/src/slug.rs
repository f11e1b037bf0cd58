//! Slug derivation and validation for content titles.
//!
//! Every public content item (post, project) is addressed by a slug
//! derived from its title. Slugs are plain ASCII: lowercase alphanumeric
//! runs joined by single hyphens, with no leading or trailing hyphen.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CoreError;

/// Canonical slug shape: `^[a-z0-9]+(-[a-z0-9]+)*$`.
fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid slug regex"))
}

/// Derive a slug from a free-text title.
///
/// ASCII letters and digits are lowercased and kept; every other run of
/// characters (whitespace, punctuation, non-ASCII) collapses into a single
/// hyphen. Leading and trailing separators are dropped, so the result is
/// either empty or matches [`is_valid_slug`].
///
/// # Examples
///
/// ```
/// use folio_core::slug::slugify;
///
/// assert_eq!(slugify("API Security Basics"), "api-security-basics");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Rust   2024  "), "rust-2024");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Whether `slug` already has the canonical shape.
pub fn is_valid_slug(slug: &str) -> bool {
    slug_pattern().is_match(slug)
}

/// Validate a caller-supplied slug, rejecting anything not in canonical form.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Expected lowercase alphanumeric segments separated by single hyphens"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_title() {
        assert_eq!(slugify("API Security Basics"), "api-security-basics");
    }

    #[test]
    fn punctuation_collapses() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("C++ & Rust: a comparison"), "c-rust-a-comparison");
    }

    #[test]
    fn repeated_whitespace() {
        assert_eq!(slugify("Rust   in    production"), "rust-in-production");
    }

    #[test]
    fn leading_and_trailing_separators() {
        assert_eq!(slugify("  --Hello--  "), "hello");
    }

    #[test]
    fn digits_preserved() {
        assert_eq!(slugify("Top 10 Tips for 2024"), "top-10-tips-for-2024");
    }

    #[test]
    fn non_ascii_dropped() {
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
    }

    #[test]
    fn empty_title() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn derived_slugs_are_valid() {
        for title in ["API Security Basics", "Hello, World!", "a", "9 lives"] {
            assert!(is_valid_slug(&slugify(title)), "title: {title}");
        }
    }

    #[test]
    fn validation_accepts_canonical() {
        assert!(validate_slug("api-security-basics").is_ok());
        assert!(validate_slug("a").is_ok());
        assert!(validate_slug("2024").is_ok());
    }

    #[test]
    fn validation_rejects_malformed() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Upper-Case").is_err());
        assert!(validate_slug("double--hyphen").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("trailing-").is_err());
        assert!(validate_slug("with space").is_err());
        assert!(validate_slug("unicode-café").is_err());
    }
}
