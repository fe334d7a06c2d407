//! DTOs for spot endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::SpotDetail;
use crate::domain::entities::{Spot, SpotImage, SpotOwner, SpotSummary};

/// Request body for creating or fully updating a spot (PUT semantics, all
/// fields required both times).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpotRequest {
    #[validate(length(min = 1, message = "Street address is required"))]
    pub address: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,

    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be within -90 and 90"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be within -180 and 180"))]
    pub lng: f64,

    #[validate(length(min = 1, max = 50, message = "Name must be less than 50 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price per day must be a positive number"))]
    pub price: f64,
}

/// A spot as returned from create, update, and embedded contexts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotBody {
    pub id: i64,
    pub owner_id: i64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A spot in a list view, annotated with review and image aggregates.
#[derive(Debug, Serialize)]
pub struct SpotListItem {
    #[serde(flatten)]
    pub spot: SpotBody,
    #[serde(rename = "avgRating")]
    pub avg_rating: Option<f64>,
    #[serde(rename = "previewImage")]
    pub preview_image: Option<String>,
}

/// Response for `GET /spots`: the page of spots plus echoed pagination.
#[derive(Debug, Serialize)]
pub struct SpotsPageResponse {
    #[serde(rename = "Spots")]
    pub spots: Vec<SpotListItem>,
    pub page: i64,
    pub size: i64,
}

/// Response for `GET /spots/current`: unpaginated, no page/size echo.
#[derive(Debug, Serialize)]
pub struct OwnedSpotsResponse {
    #[serde(rename = "Spots")]
    pub spots: Vec<SpotListItem>,
}

/// An image embedded in a spot detail.
#[derive(Debug, Serialize)]
pub struct SpotImageBody {
    pub id: i64,
    pub url: String,
    pub preview: bool,
}

/// Owner fields embedded in a spot detail.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotOwnerBody {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Response for `GET /spots/{spotId}`: the spot with aggregates, images, and
/// owner.
#[derive(Debug, Serialize)]
pub struct SpotDetailResponse {
    #[serde(flatten)]
    pub spot: SpotBody,
    #[serde(rename = "numReviews")]
    pub num_reviews: i64,
    #[serde(rename = "avgStarRating")]
    pub avg_star_rating: Option<f64>,
    #[serde(rename = "SpotImages")]
    pub spot_images: Vec<SpotImageBody>,
    #[serde(rename = "Owner")]
    pub owner: SpotOwnerBody,
}

impl From<Spot> for SpotBody {
    fn from(spot: Spot) -> Self {
        Self {
            id: spot.id,
            owner_id: spot.owner_id,
            address: spot.address,
            city: spot.city,
            state: spot.state,
            country: spot.country,
            lat: spot.lat,
            lng: spot.lng,
            name: spot.name,
            description: spot.description,
            price: spot.price,
            created_at: spot.created_at,
            updated_at: spot.updated_at,
        }
    }
}

impl From<SpotSummary> for SpotListItem {
    fn from(summary: SpotSummary) -> Self {
        Self {
            spot: summary.spot.into(),
            avg_rating: summary.avg_rating,
            preview_image: summary.preview_image,
        }
    }
}

impl From<SpotImage> for SpotImageBody {
    fn from(image: SpotImage) -> Self {
        Self {
            id: image.id,
            url: image.url,
            preview: image.preview,
        }
    }
}

impl From<SpotOwner> for SpotOwnerBody {
    fn from(owner: SpotOwner) -> Self {
        Self {
            id: owner.id,
            first_name: owner.first_name,
            last_name: owner.last_name,
        }
    }
}

impl From<SpotDetail> for SpotDetailResponse {
    fn from(detail: SpotDetail) -> Self {
        Self {
            spot: detail.spot.into(),
            num_reviews: detail.rating.num_reviews,
            avg_star_rating: detail.rating.avg_star_rating,
            spot_images: detail.images.into_iter().map(Into::into).collect(),
            owner: detail.owner.into(),
        }
    }
}
