//! Handlers for spot CRUD endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::images::DeletedResponse;
use crate::api::dto::spot_query::SpotListQuery;
use crate::api::dto::spots::{
    OwnedSpotsResponse, SpotBody, SpotDetailResponse, SpotRequest, SpotsPageResponse,
};
use crate::api::middleware::auth::CurrentUser;
use crate::domain::entities::{NewSpot, SpotUpdate};
use crate::error::AppError;
use crate::state::AppState;

/// Lists spots with aggregates, filtered and paginated.
///
/// # Endpoint
///
/// `GET /spots`
///
/// # Query Parameters
///
/// `page` (default 1), `size` (default 20, max 20), and optional bounding-box
/// and price filters: `minLat`, `maxLat`, `minLng`, `maxLng`, `minPrice`,
/// `maxPrice`. The response echoes the effective `page` and `size`.
pub async fn list_spots_handler(
    State(state): State<AppState>,
    Query(query): Query<SpotListQuery>,
) -> Result<Json<SpotsPageResponse>, AppError> {
    let (filter, page, size) = query.validate_into_filter()?;

    let spots = state.spot_service.list(filter).await?;

    Ok(Json(SpotsPageResponse {
        spots: spots.into_iter().map(Into::into).collect(),
        page,
        size,
    }))
}

/// Lists every spot owned by the authenticated user, unpaginated.
///
/// # Endpoint
///
/// `GET /spots/current`
pub async fn owned_spots_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<OwnedSpotsResponse>, AppError> {
    let spots = state.spot_service.list_owned(user.id).await?;

    Ok(Json(OwnedSpotsResponse {
        spots: spots.into_iter().map(Into::into).collect(),
    }))
}

/// Returns a spot's detail view with aggregates, images, and owner.
///
/// # Endpoint
///
/// `GET /spots/{spotId}`
pub async fn spot_detail_handler(
    State(state): State<AppState>,
    Path(spot_id): Path<i64>,
) -> Result<Json<SpotDetailResponse>, AppError> {
    let detail = state.spot_service.get_detail(spot_id).await?;

    Ok(Json(detail.into()))
}

/// Creates a spot owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /spots`
pub async fn create_spot_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<SpotRequest>,
) -> Result<(StatusCode, Json<SpotBody>), AppError> {
    payload.validate()?;

    let spot = state
        .spot_service
        .create(NewSpot {
            owner_id: user.id,
            address: payload.address,
            city: payload.city,
            state: payload.state,
            country: payload.country,
            lat: payload.lat,
            lng: payload.lng,
            name: payload.name,
            description: payload.description,
            price: payload.price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(spot.into())))
}

/// Replaces all mutable fields of a spot. Owner only.
///
/// # Endpoint
///
/// `PUT /spots/{spotId}`
pub async fn update_spot_handler(
    State(state): State<AppState>,
    Path(spot_id): Path<i64>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<SpotRequest>,
) -> Result<Json<SpotBody>, AppError> {
    payload.validate()?;

    let spot = state
        .spot_service
        .update(
            spot_id,
            user.id,
            SpotUpdate {
                address: payload.address,
                city: payload.city,
                state: payload.state,
                country: payload.country,
                lat: payload.lat,
                lng: payload.lng,
                name: payload.name,
                description: payload.description,
                price: payload.price,
            },
        )
        .await?;

    Ok(Json(spot.into()))
}

/// Deletes a spot and all of its images and reviews. Owner only.
///
/// # Endpoint
///
/// `DELETE /spots/{spotId}`
pub async fn delete_spot_handler(
    State(state): State<AppState>,
    Path(spot_id): Path<i64>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<DeletedResponse>, AppError> {
    state.spot_service.delete(spot_id, user.id).await?;

    Ok(Json(DeletedResponse::new()))
}
