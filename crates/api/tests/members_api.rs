//! HTTP-level integration tests for member signup, administration, and the
//! stats summary.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

fn signup_payload(email: &str) -> serde_json::Value {
    json!({
        "email": email,
        "contact_name": "Rim Alaoui",
        "organization": "Atelier Vert",
        "membership_type": "corporate",
        "city": "Rabat",
        "country": "MA"
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn public_signup_creates_pending_member(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/members", signup_payload("rim@exemple.org")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    let id = body["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/members/{id}"),
        &common::admin_token(),
    )
    .await;
    let member = body_json(response).await;
    assert_eq!(member["status"], "pending");
    assert_eq!(member["email"], "rim@exemple.org");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/members", signup_payload("dup@exemple.org")).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/members", signup_payload("dup@exemple.org")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_signup_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/members", json!({"contact_name": "No Email"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/members",
        json!({"email": "not-an-email", "contact_name": "Rim"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn member_listing_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/members").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/members", signup_payload("m@exemple.org")).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/members?status=pending", &common::admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["items"][0]["email"], "m@exemple.org");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_advances_status_and_delete_removes(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/members", signup_payload("cycle@exemple.org")).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/members/{id}"),
        &common::admin_token(),
        json!({"status": "active"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/members/{id}"),
        &common::admin_token(),
        json!({"status": "not-a-status"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/members/{id}"),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/members/{id}"),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_summary_reports_counts_and_series(pool: PgPool) {
    for i in 0..3 {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/members", signup_payload(&format!("s{i}@exemple.org"))).await;
    }

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/members/stats/summary").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/members/stats/summary", &common::admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["pending"], 3);
    assert_eq!(body["active"], 0);
    assert_eq!(body["monthly_new_members"].as_array().unwrap().len(), 12);
}
