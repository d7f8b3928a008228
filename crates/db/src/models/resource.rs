//! Downloadable resource entity, translation, and DTO types.

use gbc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// Language-independent facts from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resource {
    pub id: DbId,
    pub slug: String,
    pub status: String,
    pub file_url: String,
    pub file_size_bytes: Option<i64>,
    /// File format, e.g. `pdf` or `xlsx`. Distinct from the localized
    /// `resource_type` label on the translation.
    pub file_type: Option<String>,
    pub downloads: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Localized fields from one `resource_translations` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResourceTranslationFields {
    pub language: String,
    pub title: String,
    pub description: Option<String>,
    /// Localized kind label, e.g. "Technical guide" / "Guide technique".
    pub resource_type: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

/// A resource joined with its translation for one requested language.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LocalizedResource {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub resource: Resource,
    #[sqlx(flatten)]
    pub translation: ResourceTranslationFields,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// One translation in a create/update payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceTranslationInput {
    pub language: String,
    pub title: String,
    pub description: Option<String>,
    pub resource_type: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for `POST /api/resources`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResource {
    pub slug: String,
    pub status: Option<String>,
    pub file_url: String,
    pub file_size_bytes: Option<i64>,
    pub file_type: Option<String>,
    #[serde(default)]
    pub translations: Vec<ResourceTranslationInput>,
}

/// DTO for `PUT /api/resources/{slug}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateResource {
    pub status: Option<String>,
    pub file_url: Option<String>,
    pub file_size_bytes: Option<i64>,
    pub file_type: Option<String>,
    #[serde(default)]
    pub translations: Vec<ResourceTranslationInput>,
}
