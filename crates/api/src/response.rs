//! Typed response envelopes shared by the handlers.
//!
//! List endpoints return `{ "items": [...], "pagination": {...} }`; writes
//! return `{ "id", "message" }` or `{ "message" }`. Using these structs
//! instead of ad-hoc `serde_json::json!` keeps the shapes consistent
//! across resource kinds.

use serde::Serialize;

use gbc_core::pagination::page_count;
use gbc_core::types::DbId;

/// Pagination block attached to every list response.
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    /// Total matching rows, ignoring pagination.
    pub total: i64,
    /// `ceil(total / limit)`.
    pub pages: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Self {
            page,
            limit,
            total,
            pages: page_count(total, limit),
        }
    }
}

/// Standard list envelope.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Acknowledgement for updates and deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Acknowledgement for creates, carrying the new id.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
    pub message: &'static str,
}
