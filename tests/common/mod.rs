#![allow(dead_code)]

use axum::{Router, middleware};
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;

use spotstay::api::middleware::auth;
use spotstay::api::routes::{protected_routes, public_routes};
use spotstay::state::AppState;
use spotstay::utils::password::hash_password;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), "test-signing-secret".to_string())
}

/// Full router (public + authenticated groups) without rate limiting.
pub fn make_server(state: AppState) -> TestServer {
    let protected = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let app = Router::new()
        .merge(public_routes())
        .merge(protected)
        .with_state(state);

    TestServer::new(app).unwrap()
}

pub async fn create_test_user(pool: &PgPool, email: &str, username: &str) -> i64 {
    let hashed = hash_password("password").unwrap();

    sqlx::query_scalar(
        "INSERT INTO users (email, username, first_name, last_name, hashed_password) \
         VALUES ($1, $2, 'Test', 'User', $3) RETURNING id",
    )
    .bind(email)
    .bind(username)
    .bind(hashed)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Opens a session for the user and returns a raw bearer token.
pub async fn issue_token(state: &AppState, user_id: i64) -> String {
    state.auth_service.issue_session(user_id).await.unwrap()
}

pub async fn create_test_spot(pool: &PgPool, owner_id: i64, name: &str, price: f64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO spots (owner_id, address, city, state, country, lat, lng, name, description, price) \
         VALUES ($1, '123 Disney Lane', 'San Francisco', 'California', 'United States of America', \
                 37.7645358, -122.4730327, $2, 'Place where web developers are created', $3) \
         RETURNING id",
    )
    .bind(owner_id)
    .bind(name)
    .bind(price)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_review(pool: &PgPool, spot_id: i64, user_id: i64, stars: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO reviews (spot_id, user_id, review, stars) \
         VALUES ($1, $2, 'This was an awesome spot!', $3) RETURNING id",
    )
    .bind(spot_id)
    .bind(user_id)
    .bind(stars)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_spot_image(pool: &PgPool, spot_id: i64, url: &str, preview: bool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO spot_images (spot_id, url, preview) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(spot_id)
    .bind(url)
    .bind(preview)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_review_image(pool: &PgPool, review_id: i64, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO review_images (review_id, url) VALUES ($1, $2) RETURNING id",
    )
    .bind(review_id)
    .bind(url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str, column: &str, id: i64) -> i64 {
    sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {} WHERE {} = $1",
        table, column
    ))
    .bind(id)
    .fetch_one(pool)
    .await
    .unwrap()
}
