//! Blog post entity, translation, and DTO types.

use gbc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// Language-independent facts from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub slug: String,
    pub status: String,
    pub featured_image: Option<String>,
    pub read_time_mins: Option<i32>,
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Localized fields from one `blog_post_translations` row.
///
/// Only the language-dependent columns; row identity and the parent FK stay
/// internal to the repository layer.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPostTranslationFields {
    pub language: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

/// A blog post joined with its translation for one requested language.
///
/// Serializes entity fields at the top level with the localized fields
/// nested under `"translation"`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LocalizedBlogPost {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub post: BlogPost,
    #[sqlx(flatten)]
    pub translation: BlogPostTranslationFields,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// One translation in a create/update payload.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogTranslationInput {
    pub language: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

/// DTO for `POST /api/blog`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub slug: String,
    /// Defaults to `draft` when omitted.
    pub status: Option<String>,
    pub featured_image: Option<String>,
    pub read_time_mins: Option<i32>,
    #[serde(default)]
    pub translations: Vec<BlogTranslationInput>,
}

/// DTO for `PUT /api/blog/{slug}`. Entity fields are merged; the
/// translation set is replaced wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBlogPost {
    pub status: Option<String>,
    pub featured_image: Option<String>,
    pub read_time_mins: Option<i32>,
    #[serde(default)]
    pub translations: Vec<BlogTranslationInput>,
}
