//! HTTP-level integration tests for the blog endpoints: localized reads,
//! slug conflicts, status gating, pagination, counters, and meta lists.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

fn hello_payload() -> serde_json::Value {
    json!({
        "slug": "hello",
        "status": "published",
        "read_time_mins": 3,
        "translations": [
            {"language": "fr", "title": "Bonjour", "content": "Texte", "category": "Actualités", "tags": ["conseil"]},
            {"language": "en", "title": "Hello", "content": "Body", "category": "News", "tags": ["council"]}
        ]
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_read_each_language(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/blog", &common::editor_token(), hello_payload()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(created["id"].is_number());
    assert!(created["message"].is_string());

    // English read returns the English title.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/blog/hello?language=en").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["slug"], "hello");
    assert_eq!(body["translation"]["title"], "Hello");
    assert_eq!(body["translation"]["language"], "en");

    // Arabic has no translation: 404, no fallback.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/blog/hello?language=ar").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The language parameter defaults to French.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/blog/hello").await;
    let body = body_json(response).await;
    assert_eq!(body["translation"]["title"], "Bonjour");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_slug_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let first = post_json_auth(app, "/api/blog", &common::editor_token(), hello_payload()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let second = post_json_auth(app, "/api/blog", &common::editor_token(), hello_payload()).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = body_json(second).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_translation_list_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/blog",
        &common::editor_token(),
        json!({"slug": "no-translations", "translations": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_body_returns_400(pool: PgPool) {
    // Missing required `slug` field.
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/blog",
        &common::editor_token(),
        json!({"translations": [{"language": "fr", "title": "Sans slug"}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_translations_via_api(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json_auth(app, "/api/blog", &common::editor_token(), hello_payload()).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/blog/hello",
        &common::editor_token(),
        json!({"translations": [{"language": "en", "title": "Hello again"}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // French was dropped by the full replacement.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/blog/hello?language=fr").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/blog/hello?language=en").await;
    let body = body_json(response).await;
    assert_eq!(body["translation"]["title"], "Hello again");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete_missing_slug_return_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/blog/ghost",
        &common::editor_token(),
        json!({"translations": [{"language": "fr", "title": "Fantôme"}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/api/blog/ghost", &common::editor_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn views_counter_is_eventually_bumped(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json_auth(app, "/api/blog", &common::editor_token(), hello_payload()).await;

    let app = common::build_test_app(pool.clone());
    let first = body_json(get(app, "/api/blog/hello?language=en").await).await;

    let app = common::build_test_app(pool.clone());
    let second = body_json(get(app, "/api/blog/hello?language=en").await).await;

    // Monotonic: the increment is fire-and-forget, so the second response
    // may or may not include the first read yet, but it never goes down.
    assert!(second["views"].as_i64().unwrap() >= first["views"].as_i64().unwrap());

    // Give the spawned increments a moment to land, then check storage.
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    let views: (i64,) = sqlx::query_as("SELECT views FROM blog_posts WHERE slug = 'hello'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(views.0 >= 1, "at least one view must be recorded");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn like_endpoint_bumps_counter_or_404s(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json_auth(app, "/api/blog", &common::editor_token(), hello_payload()).await;

    let app = common::build_test_app(pool.clone());
    let response = common::post(app, "/api/blog/hello/like").await;
    assert_eq!(response.status(), StatusCode::OK);

    let likes: (i64,) = sqlx::query_as("SELECT likes FROM blog_posts WHERE slug = 'hello'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(likes.0, 1);

    let app = common::build_test_app(pool);
    let response = common::post(app, "/api/blog/missing/like").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_paginates_and_defaults_to_published(pool: PgPool) {
    // 12 published posts and one draft.
    for i in 0..12 {
        let app = common::build_test_app(pool.clone());
        post_json_auth(
            app,
            "/api/blog",
            &common::editor_token(),
            json!({
                "slug": format!("post-{i}"),
                "status": "published",
                "translations": [{"language": "fr", "title": format!("Article {i}")}]
            }),
        )
        .await;
    }
    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/blog",
        &common::editor_token(),
        json!({
            "slug": "hidden-draft",
            "translations": [{"language": "fr", "title": "Brouillon"}]
        }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/blog?page=2&limit=5").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["page"], 2);
    assert_eq!(body["pagination"]["limit"], 5);
    assert_eq!(body["pagination"]["total"], 12, "the draft stays hidden");
    assert_eq!(body["pagination"]["pages"], 3);
    assert!(body["items"].as_array().unwrap().len() <= 5);

    // Drafts are listable with credentials.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        "/api/blog?status=draft",
        &common::editor_token(),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["total"], 1);

    // But not anonymously.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/blog?status=draft").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/blog?status=all").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unsupported_language_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/blog?language=de").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn meta_endpoints_list_distinct_values(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json_auth(app, "/api/blog", &common::editor_token(), hello_payload()).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/blog/meta/categories?language=en").await;
    assert_eq!(response.status(), StatusCode::OK);
    let categories = body_json(response).await;
    assert_eq!(categories, json!(["News"]));

    let app = common::build_test_app(pool);
    let response = get(app, "/api/blog/meta/tags?language=fr").await;
    let tags = body_json(response).await;
    assert_eq!(tags, json!(["conseil"]));
}
