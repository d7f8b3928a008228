//! Route definitions for blog posts, registered under `/blog`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Blog routes.
///
/// ```text
/// GET    /                 list_posts
/// POST   /                 create_post (auth)
/// GET    /meta/categories  list_categories
/// GET    /meta/tags        list_tags
/// GET    /{slug}           get_post (bumps views)
/// PUT    /{slug}           update_post (auth)
/// DELETE /{slug}           delete_post (auth)
/// POST   /{slug}/like      like_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list_posts).post(blog::create_post))
        .route("/meta/categories", get(blog::list_categories))
        .route("/meta/tags", get(blog::list_tags))
        .route(
            "/{slug}",
            get(blog::get_post)
                .put(blog::update_post)
                .delete(blog::delete_post),
        )
        .route("/{slug}/like", post(blog::like_post))
}
