//! Repository for the `resources` and `resource_translations` tables.

use gbc_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::resource::{
    CreateResource, LocalizedResource, ResourceTranslationInput, UpdateResource,
};
use crate::repositories::translated::{self, KindSpec, ListFilter};

/// Table/column layout handed to the generic engine. Resources are the one
/// kind with a localized type column, so the `type` filter is enabled.
const KIND: KindSpec = KindSpec {
    entity_table: "resources",
    translation_table: "resource_translations",
    parent_column: "resource_id",
    entity_columns: "e.id, e.slug, e.status, e.file_url, e.file_size_bytes, \
        e.file_type, e.downloads, e.created_at, e.updated_at",
    translation_columns: "t.language, t.title, t.description, t.resource_type, \
        t.category, t.tags",
    order_by: "e.created_at DESC",
    type_column: Some("resource_type"),
};

/// Provides CRUD and download-counter operations for resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// List one page of resources for a language, with the total row count.
    pub async fn list(
        pool: &PgPool,
        language: &str,
        filter: &ListFilter,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<LocalizedResource>, i64), sqlx::Error> {
        let offset = (page - 1) * limit;
        let items = translated::list(pool, &KIND, language, filter, limit, offset).await?;
        let total = translated::count(pool, &KIND, language, filter).await?;
        Ok((items, total))
    }

    /// Fetch a resource by slug in the requested language.
    pub async fn get_by_slug(
        pool: &PgPool,
        slug: &str,
        language: &str,
    ) -> Result<Option<LocalizedResource>, sqlx::Error> {
        translated::get_by_slug(pool, &KIND, slug, language).await
    }

    /// Create a resource and its translation set in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateResource) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO resources (slug, status, file_url, file_size_bytes, file_type) \
             VALUES ($1, COALESCE($2, 'draft'), $3, $4, $5) \
             RETURNING id",
        )
        .bind(&input.slug)
        .bind(&input.status)
        .bind(&input.file_url)
        .bind(input.file_size_bytes)
        .bind(&input.file_type)
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
        input: &UpdateResource,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: Option<DbId> = sqlx::query_scalar(
            "UPDATE resources SET \
                status = COALESCE($2, status), \
                file_url = COALESCE($3, file_url), \
                file_size_bytes = COALESCE($4, file_size_bytes), \
                file_type = COALESCE($5, file_type) \
             WHERE slug = $1 \
             RETURNING id",
        )
        .bind(slug)
        .bind(&input.status)
        .bind(&input.file_url)
        .bind(input.file_size_bytes)
        .bind(&input.file_type)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(id) = id else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM resource_translations WHERE resource_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for tr in &input.translations {
            insert_translation(&mut tx, id, tr).await?;
        }

        tx.commit().await?;
        Ok(Some(id))
    }

    /// Delete a resource by slug, cascading to its translations.
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

    /// Bump the download counter. Returns `true` if the slug matched.
    pub async fn increment_downloads(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        translated::increment_counter(pool, &KIND, "downloads", slug).await
    }
}

/// Insert one translation row for a resource inside an open transaction.
async fn insert_translation(
    tx: &mut Transaction<'_, Postgres>,
    resource_id: DbId,
    tr: &ResourceTranslationInput,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO resource_translations \
            (resource_id, language, title, description, resource_type, category, tags) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(resource_id)
    .bind(&tr.language)
    .bind(&tr.title)
    .bind(&tr.description)
    .bind(&tr.resource_type)
    .bind(&tr.category)
    .bind(&tr.tags)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
