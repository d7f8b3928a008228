//! Generic query engine for the Entity + Translation pattern.
//!
//! Blog posts, events, and resources all share the same storage shape: a
//! language-independent entity table joined to a per-language translation
//! table with a `UNIQUE(parent, language)` constraint. The read, delete,
//! meta, and counter paths are identical up to table and column names, so
//! they are implemented once here against a [`KindSpec`]. Only the insert
//! column lists differ per kind and stay in the per-kind repositories.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

/// Static table/column layout for one translated content kind.
pub struct KindSpec {
    /// Entity table name, e.g. `blog_posts`.
    pub entity_table: &'static str,
    /// Translation table name, e.g. `blog_post_translations`.
    pub translation_table: &'static str,
    /// FK column on the translation table pointing at the entity.
    pub parent_column: &'static str,
    /// Entity column list, `e.`-qualified.
    pub entity_columns: &'static str,
    /// Translation column list, `t.`-qualified (localized fields only).
    pub translation_columns: &'static str,
    /// `ORDER BY` expression for listings.
    pub order_by: &'static str,
    /// Localized type column on the translation table, for kinds that
    /// support a `type` filter (resources).
    pub type_column: Option<&'static str>,
}

/// Equality filters applied to listings and their matching counts.
///
/// `None` fields are skipped. `status` filters the entity; the rest filter
/// translation columns for the requested language.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub status: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub resource_type: Option<String>,
}

/// Shared `FROM ... JOIN` fragment. The language predicate lives in the
/// join condition: an entity without a translation in the requested
/// language is simply absent from the result set.
fn join_sql(spec: &KindSpec) -> String {
    format!(
        "FROM {} e JOIN {} t ON t.{} = e.id AND t.language = $1",
        spec.entity_table, spec.translation_table, spec.parent_column
    )
}

/// Shared `WHERE` fragment. Returns the SQL and the next free placeholder
/// index (the type filter is only emitted for kinds that have the column).
fn filter_sql(spec: &KindSpec) -> (String, usize) {
    let mut sql = String::from(
        "WHERE ($2::TEXT IS NULL OR e.status = $2) \
         AND ($3::TEXT IS NULL OR t.category = $3) \
         AND ($4::TEXT IS NULL OR $4 = ANY(t.tags))",
    );
    let mut next = 5;
    if let Some(col) = spec.type_column {
        sql.push_str(&format!(" AND ($5::TEXT IS NULL OR t.{col} = $5)"));
        next = 6;
    }
    (sql, next)
}

/// List one page of flattened entity+translation records.
pub async fn list<T>(
    pool: &PgPool,
    spec: &KindSpec,
    language: &str,
    filter: &ListFilter,
    limit: i64,
    offset: i64,
) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let (where_sql, next) = filter_sql(spec);
    let query = format!(
        "SELECT {}, {} {} {} ORDER BY {} LIMIT ${} OFFSET ${}",
        spec.entity_columns,
        spec.translation_columns,
        join_sql(spec),
        where_sql,
        spec.order_by,
        next,
        next + 1
    );

    let mut q = sqlx::query_as::<_, T>(&query)
        .bind(language)
        .bind(&filter.status)
        .bind(&filter.category)
        .bind(&filter.tag);
    if spec.type_column.is_some() {
        q = q.bind(&filter.resource_type);
    }
    q.bind(limit).bind(offset).fetch_all(pool).await
}

/// Count all rows matching the same predicates as [`list`], ignoring
/// pagination.
pub async fn count(
    pool: &PgPool,
    spec: &KindSpec,
    language: &str,
    filter: &ListFilter,
) -> Result<i64, sqlx::Error> {
    let (where_sql, _) = filter_sql(spec);
    let query = format!("SELECT COUNT(*) {} {}", join_sql(spec), where_sql);

    let mut q = sqlx::query_scalar::<_, i64>(&query)
        .bind(language)
        .bind(&filter.status)
        .bind(&filter.category)
        .bind(&filter.tag);
    if spec.type_column.is_some() {
        q = q.bind(&filter.resource_type);
    }
    q.fetch_one(pool).await
}

/// Fetch one flattened record by slug and language.
///
/// No status predicate: gating unpublished rows is a listing concern, and
/// a freshly created draft must be readable by its author.
pub async fn get_by_slug<T>(
    pool: &PgPool,
    spec: &KindSpec,
    slug: &str,
    language: &str,
) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let query = format!(
        "SELECT {}, {} FROM {} e JOIN {} t ON t.{} = e.id AND t.language = $2 WHERE e.slug = $1",
        spec.entity_columns,
        spec.translation_columns,
        spec.entity_table,
        spec.translation_table,
        spec.parent_column
    );
    sqlx::query_as::<_, T>(&query)
        .bind(slug)
        .bind(language)
        .fetch_optional(pool)
        .await
}

/// Delete an entity by slug. The `ON DELETE CASCADE` constraint removes
/// all of its translation rows. Returns `true` if a row was deleted.
pub async fn delete_by_slug(
    pool: &PgPool,
    spec: &KindSpec,
    slug: &str,
) -> Result<bool, sqlx::Error> {
    let query = format!("DELETE FROM {} WHERE slug = $1", spec.entity_table);
    let result = sqlx::query(&query).bind(slug).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// Distinct non-null categories for one language, sorted.
pub async fn distinct_categories(
    pool: &PgPool,
    spec: &KindSpec,
    language: &str,
) -> Result<Vec<String>, sqlx::Error> {
    let query = format!(
        "SELECT DISTINCT t.category FROM {} t \
         WHERE t.language = $1 AND t.category IS NOT NULL \
         ORDER BY t.category",
        spec.translation_table
    );
    sqlx::query_scalar::<_, String>(&query)
        .bind(language)
        .fetch_all(pool)
        .await
}

/// Union of all tag arrays for one language, deduplicated and sorted.
pub async fn distinct_tags(
    pool: &PgPool,
    spec: &KindSpec,
    language: &str,
) -> Result<Vec<String>, sqlx::Error> {
    let query = format!(
        "SELECT DISTINCT tag FROM {} t, unnest(t.tags) AS tag \
         WHERE t.language = $1 \
         ORDER BY tag",
        spec.translation_table
    );
    sqlx::query_scalar::<_, String>(&query)
        .bind(language)
        .fetch_all(pool)
        .await
}

/// Increment a monotonic counter column (`views`, `likes`, `downloads`) by
/// one. Returns `true` if the slug matched a row.
///
/// `column` must be a compile-time constant at every call site; it is
/// interpolated into the statement, never taken from request input.
pub async fn increment_counter(
    pool: &PgPool,
    spec: &KindSpec,
    column: &'static str,
    slug: &str,
) -> Result<bool, sqlx::Error> {
    let query = format!(
        "UPDATE {} SET {column} = {column} + 1 WHERE slug = $1",
        spec.entity_table
    );
    let result = sqlx::query(&query).bind(slug).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}
