mod common;

use serde_json::json;
use sqlx::PgPool;

// ─── GET /spots/{spotId}/reviews ─────────────────────────────────────────────

#[sqlx::test]
async fn test_spot_reviews_with_user_and_images(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com", "owner").await;
    let reviewer = common::create_test_user(&pool, "r@example.com", "reviewer").await;
    let spot = common::create_test_spot(&pool, owner, "Reviewed", 100.0).await;
    let review = common::create_test_review(&pool, spot, reviewer, 5).await;
    common::create_test_review_image(&pool, review, "https://example.com/r1.jpg").await;

    let server = common::make_server(common::create_test_state(pool));
    let response = server.get(&format!("/spots/{spot}/reviews")).await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let reviews = body["Reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["review"], json!("This was an awesome spot!"));
    assert_eq!(reviews[0]["stars"], json!(5));
    assert_eq!(reviews[0]["User"]["id"], json!(reviewer));
    assert_eq!(reviews[0]["User"]["firstName"], json!("Test"));
    assert_eq!(
        reviews[0]["ReviewImages"][0]["url"],
        json!("https://example.com/r1.jpg")
    );
}

#[sqlx::test]
async fn test_spot_reviews_empty_for_existing_spot(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com", "owner").await;
    let spot = common::create_test_spot(&pool, owner, "Quiet", 100.0).await;

    let server = common::make_server(common::create_test_state(pool));
    let response = server.get(&format!("/spots/{spot}/reviews")).await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["Reviews"].as_array().unwrap().len(), 0);
}

#[sqlx::test]
async fn test_spot_reviews_unknown_spot(pool: PgPool) {
    let server = common::make_server(common::create_test_state(pool));
    let response = server.get("/spots/9999/reviews").await;

    response.assert_status_not_found();

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], json!("Spot couldn't be found"));
}

// ─── POST /spots/{spotId}/reviews ────────────────────────────────────────────

#[sqlx::test]
async fn test_create_review(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com", "owner").await;
    let reviewer = common::create_test_user(&pool, "r@example.com", "reviewer").await;
    let spot = common::create_test_spot(&pool, owner, "Fresh", 100.0).await;

    let state = common::create_test_state(pool);
    let token = common::issue_token(&state, reviewer).await;
    let server = common::make_server(state);

    let response = server
        .post(&format!("/spots/{spot}/reviews"))
        .authorization_bearer(&token)
        .json(&json!({ "review": "Loved it", "stars": 5 }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["spotId"], json!(spot));
    assert_eq!(body["userId"], json!(reviewer));
    assert_eq!(body["stars"], json!(5));
}

#[sqlx::test]
async fn test_create_review_validation(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com", "owner").await;
    let reviewer = common::create_test_user(&pool, "r@example.com", "reviewer").await;
    let spot = common::create_test_spot(&pool, owner, "Strict", 100.0).await;

    let state = common::create_test_state(pool);
    let token = common::issue_token(&state, reviewer).await;
    let server = common::make_server(state);

    let response = server
        .post(&format!("/spots/{spot}/reviews"))
        .authorization_bearer(&token)
        .json(&json!({ "review": "", "stars": 0 }))
        .await;

    response.assert_status_bad_request();

    let body: serde_json::Value = response.json();
    assert_eq!(body["errors"]["review"], json!("Review text is required"));
    assert_eq!(
        body["errors"]["stars"],
        json!("Stars must be an integer from 1 to 5")
    );
}

#[sqlx::test]
async fn test_create_review_unknown_spot(pool: PgPool) {
    let reviewer = common::create_test_user(&pool, "r@example.com", "reviewer").await;

    let state = common::create_test_state(pool);
    let token = common::issue_token(&state, reviewer).await;
    let server = common::make_server(state);

    let response = server
        .post("/spots/9999/reviews")
        .authorization_bearer(&token)
        .json(&json!({ "review": "Ghost", "stars": 3 }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_duplicate_review_conflict(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com", "owner").await;
    let reviewer = common::create_test_user(&pool, "r@example.com", "reviewer").await;
    let spot = common::create_test_spot(&pool, owner, "Once", 100.0).await;
    common::create_test_review(&pool, spot, reviewer, 4).await;

    let state = common::create_test_state(pool.clone());
    let token = common::issue_token(&state, reviewer).await;
    let server = common::make_server(state);

    let response = server
        .post(&format!("/spots/{spot}/reviews"))
        .authorization_bearer(&token)
        .json(&json!({ "review": "Again", "stars": 2 }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["message"],
        json!("User already has a review for this spot")
    );

    // Still exactly one review for the pair.
    assert_eq!(common::count_rows(&pool, "reviews", "spot_id", spot).await, 1);
}

// ─── GET /reviews/current ────────────────────────────────────────────────────

#[sqlx::test]
async fn test_my_reviews_with_spot_summary(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com", "owner").await;
    let reviewer = common::create_test_user(&pool, "r@example.com", "reviewer").await;
    let spot = common::create_test_spot(&pool, owner, "Summarized", 100.0).await;
    common::create_test_spot_image(&pool, spot, "https://example.com/p.jpg", true).await;
    let review = common::create_test_review(&pool, spot, reviewer, 4).await;
    common::create_test_review_image(&pool, review, "https://example.com/ri.jpg").await;

    // Another user's review must not appear.
    let other = common::create_test_user(&pool, "o@example.com", "otherrev").await;
    common::create_test_review(&pool, spot, other, 2).await;

    let state = common::create_test_state(pool);
    let token = common::issue_token(&state, reviewer).await;
    let server = common::make_server(state);

    let response = server
        .get("/reviews/current")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let reviews = body["Reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);

    let entry = &reviews[0];
    assert_eq!(entry["User"]["id"], json!(reviewer));
    assert_eq!(entry["Spot"]["id"], json!(spot));
    assert_eq!(entry["Spot"]["name"], json!("Summarized"));
    assert_eq!(entry["Spot"]["previewImage"], json!("https://example.com/p.jpg"));
    assert!(entry["Spot"].get("description").is_none());
    assert_eq!(
        entry["ReviewImages"][0]["url"],
        json!("https://example.com/ri.jpg")
    );
}
