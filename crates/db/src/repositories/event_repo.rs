//! Repository for the `events` and `event_translations` tables.

use gbc_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::event::{CreateEvent, EventTranslationInput, LocalizedEvent, UpdateEvent};
use crate::repositories::translated::{self, KindSpec, ListFilter};

/// Table/column layout handed to the generic engine. Events list in
/// chronological order rather than reverse creation order.
const KIND: KindSpec = KindSpec {
    entity_table: "events",
    translation_table: "event_translations",
    parent_column: "event_id",
    entity_columns: "e.id, e.slug, e.status, e.start_date, e.end_date, e.location, \
        e.capacity, e.price_cents, e.currency, e.registration_link, \
        e.created_at, e.updated_at",
    translation_columns: "t.language, t.title, t.description, t.category, t.tags",
    order_by: "e.start_date ASC",
    type_column: None,
};

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// List one page of events for a language, with the total row count.
    pub async fn list(
        pool: &PgPool,
        language: &str,
        filter: &ListFilter,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<LocalizedEvent>, i64), sqlx::Error> {
        let offset = (page - 1) * limit;
        let items = translated::list(pool, &KIND, language, filter, limit, offset).await?;
        let total = translated::count(pool, &KIND, language, filter).await?;
        Ok((items, total))
    }

    /// Fetch an event by slug in the requested language.
    pub async fn get_by_slug(
        pool: &PgPool,
        slug: &str,
        language: &str,
    ) -> Result<Option<LocalizedEvent>, sqlx::Error> {
        translated::get_by_slug(pool, &KIND, slug, language).await
    }

    /// Create an event and its translation set in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO events \
                (slug, status, start_date, end_date, location, capacity, price_cents, \
                 currency, registration_link) \
             VALUES ($1, COALESCE($2, 'draft'), $3, $4, $5, $6, $7, $8, $9) \
             RETURNING id",
        )
        .bind(&input.slug)
        .bind(&input.status)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.location)
        .bind(input.capacity)
        .bind(input.price_cents)
        .bind(&input.currency)
        .bind(&input.registration_link)
        .fetch_one(&mut *tx)
        .await?;

        for tr in &input.translations {
            insert_translation(&mut tx, id, tr).await?;
        }

        tx.commit().await?;
        Ok(id)
    }

    /// Update entity fields by slug and replace the entire translation set.
    /// Returns `None` if the slug does not exist.
    pub async fn update(
        pool: &PgPool,
        slug: &str,
        input: &UpdateEvent,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: Option<DbId> = sqlx::query_scalar(
            "UPDATE events SET \
                status = COALESCE($2, status), \
                start_date = COALESCE($3, start_date), \
                end_date = COALESCE($4, end_date), \
                location = COALESCE($5, location), \
                capacity = COALESCE($6, capacity), \
                price_cents = COALESCE($7, price_cents), \
                currency = COALESCE($8, currency), \
                registration_link = COALESCE($9, registration_link) \
             WHERE slug = $1 \
             RETURNING id",
        )
        .bind(slug)
        .bind(&input.status)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.location)
        .bind(input.capacity)
        .bind(input.price_cents)
        .bind(&input.currency)
        .bind(&input.registration_link)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(id) = id else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM event_translations WHERE event_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for tr in &input.translations {
            insert_translation(&mut tx, id, tr).await?;
        }

        tx.commit().await?;
        Ok(Some(id))
    }

    /// Delete an event by slug, cascading to its translations.
    pub async fn delete(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        translated::delete_by_slug(pool, &KIND, slug).await
    }

    /// Distinct categories for one language.
    pub async fn distinct_categories(
        pool: &PgPool,
        language: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        translated::distinct_categories(pool, &KIND, language).await
    }

    /// Distinct tags for one language.
    pub async fn distinct_tags(pool: &PgPool, language: &str) -> Result<Vec<String>, sqlx::Error> {
        translated::distinct_tags(pool, &KIND, language).await
    }
}

/// Insert one translation row for an event inside an open transaction.
async fn insert_translation(
    tx: &mut Transaction<'_, Postgres>,
    event_id: DbId,
    tr: &EventTranslationInput,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO event_translations \
            (event_id, language, title, description, category, tags) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(event_id)
    .bind(&tr.language)
    .bind(&tr.title)
    .bind(&tr.description)
    .bind(&tr.category)
    .bind(&tr.tags)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
