//! Handlers for spot image endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::images::{DeletedResponse, SpotImageRequest, SpotImageResponse};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Attaches an image to a spot. Owner only.
///
/// # Endpoint
///
/// `POST /spots/{spotId}/images`
pub async fn add_spot_image_handler(
    State(state): State<AppState>,
    Path(spot_id): Path<i64>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<SpotImageRequest>,
) -> Result<(StatusCode, Json<SpotImageResponse>), AppError> {
    payload.validate()?;

    let image = state
        .spot_service
        .add_image(spot_id, user.id, payload.url, payload.preview)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SpotImageResponse {
            id: image.id,
            url: image.url,
            preview: image.preview,
        }),
    ))
}

/// Deletes a spot image. Owner of the parent spot only.
///
/// # Endpoint
///
/// `DELETE /spot-images/{imageId}`
pub async fn delete_spot_image_handler(
    State(state): State<AppState>,
    Path(image_id): Path<i64>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<DeletedResponse>, AppError> {
    state.spot_service.delete_image(image_id, user.id).await?;

    Ok(Json(DeletedResponse::new()))
}
