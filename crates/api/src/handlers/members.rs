//! Handlers for the `/members` resource.
//!
//! Signup is the public site's membership form; everything else touches
//! member PII and requires authentication.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use gbc_core::content::{validate_email, validate_status, MEMBER_STATUSES};
use gbc_core::error::CoreError;
use gbc_core::pagination::{clamp_limit, clamp_page};
use gbc_core::types::DbId;

use gbc_db::models::member::{CreateMember, UpdateMember};
use gbc_db::repositories::MemberRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, ListResponse, MessageResponse, Pagination};
use crate::state::AppState;

/// Query parameters for `GET /members`.
#[derive(Debug, Deserialize)]
pub struct ListMembersParams {
    pub status: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /members
pub async fn list_members(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListMembersParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = params.status {
        validate_status(status, &MEMBER_STATUSES)?;
    }

    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);

    let (items, total) =
        MemberRepo::list(&state.pool, params.status.as_deref(), page, limit).await?;

    Ok(Json(ListResponse {
        items,
        pagination: Pagination::new(page, limit, total),
    }))
}

/// POST /members
///
/// Public membership signup. Email uniqueness is checked up front so a
/// duplicate application reads as a conflict, not a database error; the
/// status always starts as `pending`.
pub async fn create_member(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMember>,
) -> AppResult<impl IntoResponse> {
    validate_email(&input.email)?;
    if input.contact_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "contact_name must not be empty".into(),
        )));
    }

    if MemberRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "A member with email '{}' already exists",
            input.email
        ))));
    }

    let member = MemberRepo::create(&state.pool, &input).await?;

    tracing::info!(member_id = member.id, "Member signup received");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: member.id,
            message: "Membership application received",
        }),
    ))
}

/// GET /members/{id}
pub async fn get_member(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let member = MemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Member", id.to_string())))?;
    Ok(Json(member))
}

/// PUT /members/{id}
///
/// The only path that advances a member's status (pending -> active /
/// inactive).
pub async fn update_member(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateMember>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = input.status {
        validate_status(status, &MEMBER_STATUSES)?;
    }

    MemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Member", id.to_string())))?;

    tracing::info!(user_id = auth.user_id, member_id = id, "Member updated");

    Ok(Json(MessageResponse {
        message: "Member updated",
    }))
}

/// DELETE /members/{id}
pub async fn delete_member(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MemberRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found(
            "Member",
            id.to_string(),
        )));
    }

    tracing::info!(user_id = auth.user_id, member_id = id, "Member deleted");

    Ok(Json(MessageResponse {
        message: "Member deleted",
    }))
}

/// GET /members/stats/summary
///
/// Aggregate counts plus the trailing 12-month signup series. Pure read.
pub async fn member_stats(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = MemberRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
