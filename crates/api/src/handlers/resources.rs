//! Handlers for the `/resources` resource (downloadable documents).
//!
//! Resources support the localized `type` filter and a download counter
//! that moves on every successful single-resource read.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use gbc_core::content::{validate_slug, validate_status, validate_translation_set, CONTENT_STATUSES};
use gbc_core::error::CoreError;
use gbc_core::pagination::{clamp_limit, clamp_page};

use gbc_db::models::resource::{CreateResource, ResourceTranslationInput, UpdateResource};
use gbc_db::repositories::translated::ListFilter;
use gbc_db::repositories::ResourceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::query::{resolve_status_filter, LanguageParams, ListParams};
use crate::response::{CreatedResponse, ListResponse, MessageResponse, Pagination};
use crate::state::AppState;

/// GET /resources
pub async fn list_resources(
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
        resource_type: params.resource_type,
    };

    let (items, total) = ResourceRepo::list(&state.pool, &language, &filter, page, limit).await?;

    Ok(Json(ListResponse {
        items,
        pagination: Pagination::new(page, limit, total),
    }))
}

/// GET /resources/{slug}
///
/// Fetch one resource by slug and language. Fires a best-effort
/// download-counter increment that is not awaited.
pub async fn get_resource(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LanguageParams>,
) -> AppResult<impl IntoResponse> {
    let language = params.resolve()?;

    let resource = ResourceRepo::get_by_slug(&state.pool, &slug, &language)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Resource", &slug)))?;

    let pool = state.pool.clone();
    tokio::spawn(async move {
        if let Err(err) = ResourceRepo::increment_downloads(&pool, &slug).await {
            tracing::warn!(error = %err, slug = %slug, "Failed to record resource download");
        }
    });

    Ok(Json(resource))
}

/// POST /resources
pub async fn create_resource(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateResource>,
) -> AppResult<impl IntoResponse> {
    validate_slug(&input.slug)?;
    if input.file_url.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "file_url must not be empty".into(),
        )));
    }
    if let Some(ref status) = input.status {
        validate_status(status, &CONTENT_STATUSES)?;
    }
    validate_translations(&input.translations)?;

    let id = ResourceRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = auth.user_id, resource_id = id, slug = %input.slug, "Resource created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Resource created",
        }),
    ))
}

/// PUT /resources/{slug}
pub async fn update_resource(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    AppJson(input): AppJson<UpdateResource>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = input.status {
        validate_status(status, &CONTENT_STATUSES)?;
    }
    validate_translations(&input.translations)?;

    ResourceRepo::update(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Resource", &slug)))?;

    tracing::info!(user_id = auth.user_id, slug = %slug, "Resource updated");

    Ok(Json(MessageResponse {
        message: "Resource updated",
    }))
}

/// DELETE /resources/{slug}
pub async fn delete_resource(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = ResourceRepo::delete(&state.pool, &slug).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Resource", &slug)));
    }

    tracing::info!(user_id = auth.user_id, slug = %slug, "Resource deleted");

    Ok(Json(MessageResponse {
        message: "Resource deleted",
    }))
}

/// GET /resources/meta/categories
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<LanguageParams>,
) -> AppResult<impl IntoResponse> {
    let language = params.resolve()?;
    let categories = ResourceRepo::distinct_categories(&state.pool, &language).await?;
    Ok(Json(categories))
}

/// GET /resources/meta/tags
pub async fn list_tags(
    State(state): State<AppState>,
    Query(params): Query<LanguageParams>,
) -> AppResult<impl IntoResponse> {
    let language = params.resolve()?;
    let tags = ResourceRepo::distinct_tags(&state.pool, &language).await?;
    Ok(Json(tags))
}

fn validate_translations(translations: &[ResourceTranslationInput]) -> Result<(), AppError> {
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
