//! Route definitions for events, registered under `/events`.

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Event routes.
///
/// ```text
/// GET    /                 list_events
/// POST   /                 create_event (auth)
/// GET    /meta/categories  list_categories
/// GET    /meta/tags        list_tags
/// GET    /{slug}           get_event
/// PUT    /{slug}           update_event (auth)
/// DELETE /{slug}           delete_event (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route("/meta/categories", get(events::list_categories))
        .route("/meta/tags", get(events::list_tags))
        .route(
            "/{slug}",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
}
