//! Route definitions for user administration, registered under
//! `/admin/users`.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin user-management routes (admin role only).
///
/// ```text
/// GET  /  list_users
/// POST /  create_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(admin::list_users).post(admin::create_user))
}
