//! Repository for the `blog_posts` and `blog_post_translations` tables.

use gbc_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::blog_post::{
    BlogTranslationInput, CreateBlogPost, LocalizedBlogPost, UpdateBlogPost,
};
use crate::repositories::translated::{self, KindSpec, ListFilter};

/// Table/column layout handed to the generic engine.
const KIND: KindSpec = KindSpec {
    entity_table: "blog_posts",
    translation_table: "blog_post_translations",
    parent_column: "post_id",
    entity_columns: "e.id, e.slug, e.status, e.featured_image, e.read_time_mins, \
        e.views, e.likes, e.comments, e.created_at, e.updated_at",
    translation_columns: "t.language, t.title, t.excerpt, t.content, t.author, \
        t.category, t.tags, t.seo_title, t.seo_description",
    order_by: "e.created_at DESC",
    type_column: None,
};

/// Provides CRUD and counter operations for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// List one page of posts for a language, returning the page and the
    /// total row count under the same filters.
    pub async fn list(
        pool: &PgPool,
        language: &str,
        filter: &ListFilter,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<LocalizedBlogPost>, i64), sqlx::Error> {
        let offset = (page - 1) * limit;
        let items = translated::list(pool, &KIND, language, filter, limit, offset).await?;
        let total = translated::count(pool, &KIND, language, filter).await?;
        Ok((items, total))
    }

    /// Fetch a post by slug in the requested language.
    pub async fn get_by_slug(
        pool: &PgPool,
        slug: &str,
        language: &str,
    ) -> Result<Option<LocalizedBlogPost>, sqlx::Error> {
        translated::get_by_slug(pool, &KIND, slug, language).await
    }

    /// Create a post and its translation set in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateBlogPost) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO blog_posts (slug, status, featured_image, read_time_mins) \
             VALUES ($1, COALESCE($2, 'draft'), $3, $4) \
             RETURNING id",
        )
        .bind(&input.slug)
        .bind(&input.status)
        .bind(&input.featured_image)
        .bind(input.read_time_mins)
        .fetch_one(&mut *tx)
        .await?;

        for tr in &input.translations {
            insert_translation(&mut tx, id, tr).await?;
        }

        tx.commit().await?;
        Ok(id)
    }

    /// Update entity fields by slug and replace the entire translation set.
    ///
    /// Returns `None` (nothing written) if the slug does not exist. Any
    /// failure mid-way rolls the whole transaction back, so translations
    /// are never left deleted without their replacements.
    pub async fn update(
        pool: &PgPool,
        slug: &str,
        input: &UpdateBlogPost,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: Option<DbId> = sqlx::query_scalar(
            "UPDATE blog_posts SET \
                status = COALESCE($2, status), \
                featured_image = COALESCE($3, featured_image), \
                read_time_mins = COALESCE($4, read_time_mins) \
             WHERE slug = $1 \
             RETURNING id",
        )
        .bind(slug)
        .bind(&input.status)
        .bind(&input.featured_image)
        .bind(input.read_time_mins)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(id) = id else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM blog_post_translations WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for tr in &input.translations {
            insert_translation(&mut tx, id, tr).await?;
        }

        tx.commit().await?;
        Ok(Some(id))
    }

    /// Delete a post by slug, cascading to its translations.
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

    /// Bump the view counter. Returns `true` if the slug matched.
    pub async fn increment_views(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        translated::increment_counter(pool, &KIND, "views", slug).await
    }

    /// Bump the like counter. Returns `true` if the slug matched.
    pub async fn increment_likes(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        translated::increment_counter(pool, &KIND, "likes", slug).await
    }
}

/// Insert one translation row for a post inside an open transaction.
async fn insert_translation(
    tx: &mut Transaction<'_, Postgres>,
    post_id: DbId,
    tr: &BlogTranslationInput,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO blog_post_translations \
            (post_id, language, title, excerpt, content, author, category, tags, \
             seo_title, seo_description) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
    )
    .bind(post_id)
    .bind(&tr.language)
    .bind(&tr.title)
    .bind(&tr.excerpt)
    .bind(&tr.content)
    .bind(&tr.author)
    .bind(&tr.category)
    .bind(&tr.tags)
    .bind(&tr.seo_title)
    .bind(&tr.seo_description)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
