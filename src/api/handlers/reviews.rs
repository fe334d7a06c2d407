//! Handlers for review endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::reviews::{
    ReviewBody, ReviewRequest, ReviewWithSpotBody, ReviewWithUserBody, ReviewsResponse,
};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all reviews for a spot, with reviewer names and images.
///
/// # Endpoint
///
/// `GET /spots/{spotId}/reviews`
///
/// # Errors
///
/// Returns 404 when the spot does not exist; an empty `Reviews` array is
/// only returned for existing spots.
pub async fn spot_reviews_handler(
    State(state): State<AppState>,
    Path(spot_id): Path<i64>,
) -> Result<Json<ReviewsResponse<ReviewWithUserBody>>, AppError> {
    let reviews = state.review_service.list_by_spot(spot_id).await?;

    Ok(Json(ReviewsResponse {
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}

/// Creates a review on a spot.
///
/// # Endpoint
///
/// `POST /spots/{spotId}/reviews`
///
/// # Errors
///
/// Returns 404 for an unknown spot and 409 when the user already has a
/// review for it.
pub async fn create_review_handler(
    State(state): State<AppState>,
    Path(spot_id): Path<i64>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<ReviewRequest>,
) -> Result<(StatusCode, Json<ReviewBody>), AppError> {
    payload.validate()?;

    let review = state
        .review_service
        .create(spot_id, user.id, payload.review, payload.stars)
        .await?;

    Ok((StatusCode::CREATED, Json(review.into())))
}

/// Lists every review written by the authenticated user.
///
/// # Endpoint
///
/// `GET /reviews/current`
pub async fn my_reviews_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ReviewsResponse<ReviewWithSpotBody>>, AppError> {
    let reviews = state.review_service.list_mine(user.id).await?;

    Ok(Json(ReviewsResponse {
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}
