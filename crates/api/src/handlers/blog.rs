//! Handlers for the `/blog` resource.
//!
//! Blog posts are the translated kind with view and like counters; the
//! view counter moves on every successful single-post read.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use gbc_core::content::{validate_slug, validate_status, validate_translation_set, CONTENT_STATUSES};
use gbc_core::error::CoreError;
use gbc_core::pagination::{clamp_limit, clamp_page};

use gbc_db::models::blog_post::{CreateBlogPost, UpdateBlogPost};
use gbc_db::repositories::translated::ListFilter;
use gbc_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::query::{resolve_status_filter, LanguageParams, ListParams};
use crate::response::{CreatedResponse, ListResponse, MessageResponse, Pagination};
use crate::state::AppState;

/// GET /blog
///
/// List posts in one language with optional category/tag/status filters.
/// Unpublished statuses are only listable by authenticated callers.
pub async fn list_posts(
    OptionalAuthUser(auth): OptionalAuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let language = crate::query::resolve_language(params.language.as_deref())?;
    let status = resolve_status_filter(params.status.as_deref(), &CONTENT_STATUSES, auth.is_some())?;

    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);

    let filter = ListFilter {
        status,
        category: params.category,
        tag: params.tag,
        resource_type: None,
    };

    let (items, total) = BlogPostRepo::list(&state.pool, &language, &filter, page, limit).await?;

    Ok(Json(ListResponse {
        items,
        pagination: Pagination::new(page, limit, total),
    }))
}

/// GET /blog/{slug}
///
/// Fetch one post by slug and language. Fires a best-effort view-counter
/// increment that is not awaited: the returned `views` value may not yet
/// reflect this read.
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LanguageParams>,
) -> AppResult<impl IntoResponse> {
    let language = params.resolve()?;

    let post = BlogPostRepo::get_by_slug(&state.pool, &slug, &language)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Blog post", &slug)))?;

    let pool = state.pool.clone();
    tokio::spawn(async move {
        if let Err(err) = BlogPostRepo::increment_views(&pool, &slug).await {
            tracing::warn!(error = %err, slug = %slug, "Failed to record blog post view");
        }
    });

    Ok(Json(post))
}

/// POST /blog
///
/// Create a post with its initial translation set, atomically.
pub async fn create_post(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateBlogPost>,
) -> AppResult<impl IntoResponse> {
    validate_slug(&input.slug)?;
    if let Some(ref status) = input.status {
        validate_status(status, &CONTENT_STATUSES)?;
    }
    validate_translations(&input.translations)?;

    let id = BlogPostRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = auth.user_id, post_id = id, slug = %input.slug, "Blog post created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Blog post created",
        }),
    ))
}

/// PUT /blog/{slug}
///
/// Update entity fields and replace the entire translation set.
pub async fn update_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    AppJson(input): AppJson<UpdateBlogPost>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = input.status {
        validate_status(status, &CONTENT_STATUSES)?;
    }
    validate_translations(&input.translations)?;

    BlogPostRepo::update(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Blog post", &slug)))?;

    tracing::info!(user_id = auth.user_id, slug = %slug, "Blog post updated");

    Ok(Json(MessageResponse {
        message: "Blog post updated",
    }))
}

/// DELETE /blog/{slug}
pub async fn delete_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = BlogPostRepo::delete(&state.pool, &slug).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Blog post", &slug)));
    }

    tracing::info!(user_id = auth.user_id, slug = %slug, "Blog post deleted");

    Ok(Json(MessageResponse {
        message: "Blog post deleted",
    }))
}

/// POST /blog/{slug}/like
///
/// Public like action; the only mutation path for the like counter.
pub async fn like_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let liked = BlogPostRepo::increment_likes(&state.pool, &slug).await?;
    if !liked {
        return Err(AppError::Core(CoreError::not_found("Blog post", &slug)));
    }
    Ok(Json(MessageResponse {
        message: "Blog post liked",
    }))
}

/// GET /blog/meta/categories
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<LanguageParams>,
) -> AppResult<impl IntoResponse> {
    let language = params.resolve()?;
    let categories = BlogPostRepo::distinct_categories(&state.pool, &language).await?;
    Ok(Json(categories))
}

/// GET /blog/meta/tags
pub async fn list_tags(
    State(state): State<AppState>,
    Query(params): Query<LanguageParams>,
) -> AppResult<impl IntoResponse> {
    let language = params.resolve()?;
    let tags = BlogPostRepo::distinct_tags(&state.pool, &language).await?;
    Ok(Json(tags))
}

/// Validate the translation payload: non-empty, supported languages, no
/// duplicates, titles present, bounded tags.
fn validate_translations(
    translations: &[gbc_db::models::blog_post::BlogTranslationInput],
) -> Result<(), AppError> {
    let pairs: Vec<(&str, &str)> = translations
        .iter()
        .map(|t| (t.language.as_str(), t.title.as_str()))
        .collect();
    validate_translation_set(&pairs)?;
    for t in translations {
        gbc_core::content::validate_tags(&t.tags)?;
    }
    Ok(())
}
