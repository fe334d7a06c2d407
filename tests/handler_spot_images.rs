mod common;

use serde_json::json;
use sqlx::PgPool;

// ─── POST /spots/{spotId}/images ─────────────────────────────────────────────

#[sqlx::test]
async fn test_add_spot_image_by_owner(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com", "owner").await;
    let spot = common::create_test_spot(&pool, owner, "Pictured", 100.0).await;

    let state = common::create_test_state(pool);
    let token = common::issue_token(&state, owner).await;
    let server = common::make_server(state);

    let response = server
        .post(&format!("/spots/{spot}/images"))
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com/new.jpg", "preview": true }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["url"], json!("https://example.com/new.jpg"));
    assert_eq!(body["preview"], json!(true));
    assert!(body["id"].is_i64());
}

#[sqlx::test]
async fn test_add_spot_image_by_non_owner(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com", "owner").await;
    let intruder = common::create_test_user(&pool, "other@example.com", "intruder").await;
    let spot = common::create_test_spot(&pool, owner, "Guarded", 100.0).await;

    let state = common::create_test_state(pool);
    let token = common::issue_token(&state, intruder).await;
    let server = common::make_server(state);

    let response = server
        .post(&format!("/spots/{spot}/images"))
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com/new.jpg" }))
        .await;

    response.assert_status_forbidden();
}

#[sqlx::test]
async fn test_add_spot_image_unknown_spot(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com", "owner").await;

    let state = common::create_test_state(pool);
    let token = common::issue_token(&state, owner).await;
    let server = common::make_server(state);

    let response = server
        .post("/spots/9999/images")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com/new.jpg" }))
        .await;

    response.assert_status_not_found();

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], json!("Spot couldn't be found"));
}

#[sqlx::test]
async fn test_add_spot_image_invalid_url(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com", "owner").await;
    let spot = common::create_test_spot(&pool, owner, "Strict", 100.0).await;

    let state = common::create_test_state(pool);
    let token = common::issue_token(&state, owner).await;
    let server = common::make_server(state);

    let response = server
        .post(&format!("/spots/{spot}/images"))
        .authorization_bearer(&token)
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();
}

// ─── DELETE /spot-images/{imageId} ───────────────────────────────────────────

#[sqlx::test]
async fn test_delete_spot_image_by_owner(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com", "owner").await;
    let spot = common::create_test_spot(&pool, owner, "Pictured", 100.0).await;
    let image = common::create_test_spot_image(&pool, spot, "https://example.com/x.jpg", false).await;

    let state = common::create_test_state(pool.clone());
    let token = common::issue_token(&state, owner).await;
    let server = common::make_server(state);

    let response = server
        .delete(&format!("/spot-images/{image}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], json!("Successfully deleted"));
    assert_eq!(
        common::count_rows(&pool, "spot_images", "spot_id", spot).await,
        0
    );
}

#[sqlx::test]
async fn test_delete_spot_image_by_non_owner(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com", "owner").await;
    let intruder = common::create_test_user(&pool, "other@example.com", "intruder").await;
    let spot = common::create_test_spot(&pool, owner, "Guarded", 100.0).await;
    let image = common::create_test_spot_image(&pool, spot, "https://example.com/x.jpg", false).await;

    let state = common::create_test_state(pool);
    let token = common::issue_token(&state, intruder).await;
    let server = common::make_server(state);

    let response = server
        .delete(&format!("/spot-images/{image}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status_forbidden();
}

#[sqlx::test]
async fn test_delete_spot_image_not_found(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com", "owner").await;

    let state = common::create_test_state(pool);
    let token = common::issue_token(&state, owner).await;
    let server = common::make_server(state);

    let response = server
        .delete("/spot-images/9999")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], json!("Spot Image couldn't be found"));
}
