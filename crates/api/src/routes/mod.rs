pub mod admin;
pub mod auth;
pub mod blog;
pub mod events;
pub mod health;
pub mod members;
pub mod resources;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
///
/// /admin/users                     list, create (admin only)
///
/// /blog                            list, create
/// /blog/{slug}                     get, update, delete
/// /blog/{slug}/like                like (POST)
/// /blog/meta/categories            distinct categories
/// /blog/meta/tags                  distinct tags
///
/// /events                          list, create
/// /events/{slug}                   get, update, delete
/// /events/meta/categories          distinct categories
/// /events/meta/tags                distinct tags
///
/// /resources                       list, create
/// /resources/{slug}                get, update, delete
/// /resources/meta/categories       distinct categories
/// /resources/meta/tags             distinct tags
///
/// /members                         list (auth), signup (public)
/// /members/{id}                    get, update, delete (auth)
/// /members/stats/summary           aggregate stats (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin/users", admin::router())
        .nest("/blog", blog::router())
        .nest("/events", events::router())
        .nest("/resources", resources::router())
        .nest("/members", members::router())
}
