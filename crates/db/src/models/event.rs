//! Event entity, translation, and DTO types.

use gbc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// Language-independent facts from the `events` table.
///
/// Prices are stored as integer cents with an ISO currency code; there is
/// no floating-point money anywhere in the schema.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub slug: String,
    pub status: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub registration_link: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Localized fields from one `event_translations` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventTranslationFields {
    pub language: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

/// An event joined with its translation for one requested language.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LocalizedEvent {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub event: Event,
    #[sqlx(flatten)]
    pub translation: EventTranslationFields,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// One translation in a create/update payload.
#[derive(Debug, Clone, Deserialize)]
pub struct EventTranslationInput {
    pub language: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for `POST /api/events`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub slug: String,
    pub status: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub registration_link: Option<String>,
    #[serde(default)]
    pub translations: Vec<EventTranslationInput>,
}

/// DTO for `PUT /api/events/{slug}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub status: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub registration_link: Option<String>,
    #[serde(default)]
    pub translations: Vec<EventTranslationInput>,
}
