//! Handlers for the `/events` resource.
//!
//! Events allow the extra `cancelled` status and list in chronological
//! order. No counters.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use gbc_core::content::{validate_slug, validate_status, validate_translation_set, EVENT_STATUSES};
use gbc_core::error::CoreError;
use gbc_core::pagination::{clamp_limit, clamp_page};

use gbc_db::models::event::{CreateEvent, EventTranslationInput, UpdateEvent};
use gbc_db::repositories::translated::ListFilter;
use gbc_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::query::{resolve_status_filter, LanguageParams, ListParams};
use crate::response::{CreatedResponse, ListResponse, MessageResponse, Pagination};
use crate::state::AppState;

/// GET /events
pub async fn list_events(
    OptionalAuthUser(auth): OptionalAuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let language = crate::query::resolve_language(params.language.as_deref())?;
    let status = resolve_status_filter(params.status.as_deref(), &EVENT_STATUSES, auth.is_some())?;

    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);

    let filter = ListFilter {
        status,
        category: params.category,
        tag: params.tag,
        resource_type: None,
    };

    let (items, total) = EventRepo::list(&state.pool, &language, &filter, page, limit).await?;

    Ok(Json(ListResponse {
        items,
        pagination: Pagination::new(page, limit, total),
    }))
}

/// GET /events/{slug}
pub async fn get_event(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LanguageParams>,
) -> AppResult<impl IntoResponse> {
    let language = params.resolve()?;

    let event = EventRepo::get_by_slug(&state.pool, &slug, &language)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Event", &slug)))?;

    Ok(Json(event))
}

/// POST /events
pub async fn create_event(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    validate_slug(&input.slug)?;
    if let Some(ref status) = input.status {
        validate_status(status, &EVENT_STATUSES)?;
    }
    validate_translations(&input.translations)?;

    let id = EventRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = auth.user_id, event_id = id, slug = %input.slug, "Event created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Event created",
        }),
    ))
}

/// PUT /events/{slug}
pub async fn update_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    AppJson(input): AppJson<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = input.status {
        validate_status(status, &EVENT_STATUSES)?;
    }
    validate_translations(&input.translations)?;

    EventRepo::update(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Event", &slug)))?;

    tracing::info!(user_id = auth.user_id, slug = %slug, "Event updated");

    Ok(Json(MessageResponse {
        message: "Event updated",
    }))
}

/// DELETE /events/{slug}
pub async fn delete_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = EventRepo::delete(&state.pool, &slug).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Event", &slug)));
    }

    tracing::info!(user_id = auth.user_id, slug = %slug, "Event deleted");

    Ok(Json(MessageResponse {
        message: "Event deleted",
    }))
}

/// GET /events/meta/categories
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<LanguageParams>,
) -> AppResult<impl IntoResponse> {
    let language = params.resolve()?;
    let categories = EventRepo::distinct_categories(&state.pool, &language).await?;
    Ok(Json(categories))
}

/// GET /events/meta/tags
pub async fn list_tags(
    State(state): State<AppState>,
    Query(params): Query<LanguageParams>,
) -> AppResult<impl IntoResponse> {
    let language = params.resolve()?;
    let tags = EventRepo::distinct_tags(&state.pool, &language).await?;
    Ok(Json(tags))
}

fn validate_translations(translations: &[EventTranslationInput]) -> Result<(), AppError> {
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
