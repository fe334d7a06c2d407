//! API route configuration.
//!
//! Routes are split into a public group and a group behind Bearer token
//! authentication ([`crate::api::middleware::auth`]). Paths that appear in
//! both groups (`/spots`, `/spots/{spotId}`) have their method routers merged
//! at the top level, so only the protected methods require a token.

use crate::api::handlers::{
    add_review_image_handler, add_spot_image_handler, create_review_handler, create_spot_handler,
    delete_review_image_handler, delete_spot_handler, delete_spot_image_handler, list_spots_handler,
    login_handler, my_reviews_handler, owned_spots_handler, signup_handler, spot_detail_handler,
    spot_reviews_handler, update_spot_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Routes that require no authentication.
///
/// # Endpoints
///
/// - `POST /users`                    - Sign up
/// - `POST /session`                  - Log in
/// - `GET  /spots`                    - List spots (filtered, paginated)
/// - `GET  /spots/{spotId}`           - Spot detail
/// - `GET  /spots/{spotId}/reviews`   - Reviews for a spot
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(signup_handler))
        .route("/session", post(login_handler))
        .route("/spots", get(list_spots_handler))
        .route("/spots/{spotId}", get(spot_detail_handler))
        .route("/spots/{spotId}/reviews", get(spot_reviews_handler))
}

/// Routes behind Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /spots/current`             - List own spots
/// - `POST   /spots`                     - Create a spot
/// - `PUT    /spots/{spotId}`            - Update a spot (owner)
/// - `DELETE /spots/{spotId}`            - Delete a spot (owner)
/// - `POST   /spots/{spotId}/images`     - Attach a spot image (owner)
/// - `DELETE /spot-images/{imageId}`     - Delete a spot image (owner)
/// - `POST   /spots/{spotId}/reviews`    - Create a review
/// - `GET    /reviews/current`           - List own reviews
/// - `POST   /reviews/{reviewId}/images` - Attach a review image (author, max 10)
/// - `DELETE /review-images/{imageId}`   - Delete a review image (author)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/spots/current", get(owned_spots_handler))
        .route("/spots", post(create_spot_handler))
        .route(
            "/spots/{spotId}",
            put(update_spot_handler).delete(delete_spot_handler),
        )
        .route("/spots/{spotId}/images", post(add_spot_image_handler))
        .route("/spot-images/{imageId}", delete(delete_spot_image_handler))
        .route("/spots/{spotId}/reviews", post(create_review_handler))
        .route("/reviews/current", get(my_reviews_handler))
        .route("/reviews/{reviewId}/images", post(add_review_image_handler))
        .route(
            "/review-images/{imageId}",
            delete(delete_review_image_handler),
        )
}
