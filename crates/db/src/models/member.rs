//! Member entity and DTO types. Members carry no translations.

use gbc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub email: String,
    pub contact_name: String,
    pub organization: Option<String>,
    pub phone: Option<String>,
    pub membership_type: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for `POST /api/members` (public signup). Status is always forced to
/// `pending` regardless of input.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMember {
    pub email: String,
    pub contact_name: String,
    pub organization: Option<String>,
    pub phone: Option<String>,
    pub membership_type: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// DTO for `PUT /api/members/{id}`. The only path that advances `status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMember {
    pub contact_name: Option<String>,
    pub organization: Option<String>,
    pub phone: Option<String>,
    pub membership_type: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Aggregation read models
// ---------------------------------------------------------------------------

/// New-member count for one calendar month (`YYYY-MM`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonthlyNewMembers {
    pub month: String,
    pub count: i64,
}

/// Aggregate counts plus the trailing 12-month signup series.
#[derive(Debug, Clone, Serialize)]
pub struct MemberStats {
    pub total: i64,
    pub active: i64,
    pub pending: i64,
    pub inactive: i64,
    pub monthly_new_members: Vec<MonthlyNewMembers>,
}
