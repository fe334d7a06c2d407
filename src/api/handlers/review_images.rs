//! Handlers for review image endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::images::{DeletedResponse, ReviewImageRequest, ReviewImageResponse};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Attaches an image to a review. Author only, capped at 10 images.
///
/// # Endpoint
///
/// `POST /reviews/{reviewId}/images`
///
/// # Errors
///
/// Returns 403 when the cap is reached, 404 for an unknown review.
pub async fn add_review_image_handler(
    State(state): State<AppState>,
    Path(review_id): Path<i64>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<ReviewImageRequest>,
) -> Result<(StatusCode, Json<ReviewImageResponse>), AppError> {
    payload.validate()?;

    let image = state
        .review_service
        .add_image(review_id, user.id, payload.url)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewImageResponse {
            id: image.id,
            url: image.url,
        }),
    ))
}

/// Deletes a review image. Author of the parent review only.
///
/// # Endpoint
///
/// `DELETE /review-images/{imageId}`
pub async fn delete_review_image_handler(
    State(state): State<AppState>,
    Path(image_id): Path<i64>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<DeletedResponse>, AppError> {
    state.review_service.delete_image(image_id, user.id).await?;

    Ok(Json(DeletedResponse::new()))
}
