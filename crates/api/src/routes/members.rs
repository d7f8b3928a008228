//! Route definitions for members, registered under `/members`.

use axum::routing::get;
use axum::Router;

use crate::handlers::members;
use crate::state::AppState;

/// Member routes. Signup is public; everything else requires auth.
///
/// ```text
/// GET    /               list_members (auth)
/// POST   /               create_member (public signup)
/// GET    /stats/summary  member_stats (auth)
/// GET    /{id}           get_member (auth)
/// PUT    /{id}           update_member (auth)
/// DELETE /{id}           delete_member (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(members::list_members).post(members::create_member),
        )
        .route("/stats/summary", get(members::member_stats))
        .route(
            "/{id}",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        )
}
