//! Shared query parameter types for API handlers.

use serde::Deserialize;

use gbc_core::content::{validate_language, validate_status, DEFAULT_LANGUAGE};
use gbc_core::error::CoreError;

use crate::error::{AppError, AppResult};

/// Query parameters for translated-content list endpoints
/// (`?language=&page=&limit=&category=&tag=&type=&status=`).
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub language: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub tag: Option<String>,
    /// Localized type filter; only meaningful for resources.
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub status: Option<String>,
}

/// Query parameters for single-item and meta endpoints (`?language=`).
#[derive(Debug, Deserialize)]
pub struct LanguageParams {
    pub language: Option<String>,
}

impl LanguageParams {
    /// Resolve the requested language, defaulting to French.
    pub fn resolve(&self) -> AppResult<String> {
        resolve_language(self.language.as_deref())
    }
}

/// Validate and default a language parameter.
pub fn resolve_language(language: Option<&str>) -> AppResult<String> {
    let language = language.unwrap_or(DEFAULT_LANGUAGE);
    validate_language(language)?;
    Ok(language.to_string())
}

/// Resolve the status filter for a listing.
///
/// Public callers always see `published`. Any other status (including
/// `all`, which clears the filter entirely) requires authentication, so
/// drafts and archives stay behind the admin dashboard.
pub fn resolve_status_filter(
    requested: Option<&str>,
    allowed: &[&str],
    authenticated: bool,
) -> AppResult<Option<String>> {
    match requested {
        None => Ok(Some("published".to_string())),
        Some("published") => Ok(Some("published".to_string())),
        Some(status) => {
            if !authenticated {
                return Err(AppError::Core(CoreError::Unauthorized(
                    "Authentication required to list unpublished content".into(),
                )));
            }
            if status == "all" {
                return Ok(None);
            }
            validate_status(status, allowed)?;
            Ok(Some(status.to_string()))
        }
    }
}
