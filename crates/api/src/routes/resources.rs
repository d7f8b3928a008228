//! Route definitions for downloadable resources, registered under
//! `/resources`.

use axum::routing::get;
use axum::Router;

use crate::handlers::resources;
use crate::state::AppState;

/// Resource routes.
///
/// ```text
/// GET    /                 list_resources
/// POST   /                 create_resource (auth)
/// GET    /meta/categories  list_categories
/// GET    /meta/tags        list_tags
/// GET    /{slug}           get_resource (bumps downloads)
/// PUT    /{slug}           update_resource (auth)
/// DELETE /{slug}           delete_resource (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(resources::list_resources).post(resources::create_resource),
        )
        .route("/meta/categories", get(resources::list_categories))
        .route("/meta/tags", get(resources::list_tags))
        .route(
            "/{slug}",
            get(resources::get_resource)
                .put(resources::update_resource)
                .delete(resources::delete_resource),
        )
}
