//! Validation rules for localized content: languages, lifecycle statuses,
//! slugs, titles, tags, and translation sets.
//!
//! The supported-language and status sets are enforced here, by convention,
//! rather than by database constraints.

use crate::error::CoreError;

/// Languages the platform publishes in.
pub const SUPPORTED_LANGUAGES: [&str; 3] = ["fr", "en", "ar"];

/// Language used when a request does not specify one.
pub const DEFAULT_LANGUAGE: &str = "fr";

/// Lifecycle statuses for blog posts and resources.
pub const CONTENT_STATUSES: [&str; 3] = ["draft", "published", "archived"];

/// Lifecycle statuses for events (content statuses plus `cancelled`).
pub const EVENT_STATUSES: [&str; 4] = ["draft", "published", "archived", "cancelled"];

/// Membership statuses. New members always start as `pending`.
pub const MEMBER_STATUSES: [&str; 3] = ["pending", "active", "inactive"];

/// Maximum slug length.
pub const MAX_SLUG_LEN: usize = 200;

/// Maximum title length.
pub const MAX_TITLE_LEN: usize = 300;

/// Maximum number of tags per translation.
pub const MAX_TAGS: usize = 20;

/// Validate that a language code is one of the supported set.
pub fn validate_language(language: &str) -> Result<(), CoreError> {
    if SUPPORTED_LANGUAGES.contains(&language) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Unsupported language '{language}' (expected one of: {})",
        SUPPORTED_LANGUAGES.join(", ")
    )))
}

/// Validate a lifecycle status against the allowed set for the kind.
pub fn validate_status(status: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&status) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Invalid status '{status}' (expected one of: {})",
        allowed.join(", ")
    )))
}

/// Validate a URL slug: lowercase alphanumerics and hyphens, no leading,
/// trailing, or doubled hyphen.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    let valid_chars = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid_chars || slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}': use lowercase letters, digits, and single hyphens"
        )));
    }
    Ok(())
}

/// Derive a slug from a title: lowercase, non-alphanumerics collapsed to
/// single hyphens. Non-ASCII titles (e.g. Arabic) may produce an empty
/// result; callers must then require an explicit slug.
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug.truncate(MAX_SLUG_LEN);
    slug
}

/// Validate a localized title.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a tag list: bounded count, no empty tags.
pub fn validate_tags(tags: &[String]) -> Result<(), CoreError> {
    if tags.len() > MAX_TAGS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_TAGS} tags are allowed"
        )));
    }
    if tags.iter().any(|t| t.trim().is_empty()) {
        return Err(CoreError::Validation("Tags must not be empty".into()));
    }
    Ok(())
}

/// Validate a translation set as `(language, title)` pairs: the set must be
/// non-empty, every language supported, every title present, and no
/// language repeated (at most one translation per language per entity).
pub fn validate_translation_set(translations: &[(&str, &str)]) -> Result<(), CoreError> {
    if translations.is_empty() {
        return Err(CoreError::Validation(
            "At least one translation is required".into(),
        ));
    }
    let mut seen: Vec<&str> = Vec::with_capacity(translations.len());
    for (language, title) in translations {
        validate_language(language)?;
        validate_title(title)?;
        if seen.contains(language) {
            return Err(CoreError::Validation(format!(
                "Duplicate translation for language '{language}'"
            )));
        }
        seen.push(language);
    }
    Ok(())
}

/// Minimal structural email check. Full RFC validation is not the goal;
/// this catches the obviously malformed input before it reaches the
/// unique-email precondition.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        )));
    }
    Ok(())
}
