//! DTOs for review endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Review, ReviewImage};
use crate::domain::repositories::{ReviewSpotSummary, ReviewWithSpot, ReviewWithUser};

/// Request body for creating a review.
#[derive(Debug, Deserialize, Validate)]
pub struct ReviewRequest {
    #[validate(length(min = 1, message = "Review text is required"))]
    pub review: String,

    #[validate(range(min = 1, max = 5, message = "Stars must be an integer from 1 to 5"))]
    pub stars: i32,
}

/// A review as returned from create and embedded contexts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewBody {
    pub id: i64,
    pub spot_id: i64,
    pub user_id: i64,
    pub review: String,
    pub stars: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The reviewer's public fields embedded in review listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUserBody {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// An image embedded in a review listing.
#[derive(Debug, Serialize)]
pub struct ReviewImageBody {
    pub id: i64,
    pub url: String,
}

/// The reviewed spot embedded in the "my reviews" listing: no description or
/// timestamps, plus the resolved preview image.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSpotBody {
    pub id: i64,
    pub owner_id: i64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub price: f64,
    pub preview_image: Option<String>,
}

/// A review with its author and images, for `GET /spots/{spotId}/reviews`.
#[derive(Debug, Serialize)]
pub struct ReviewWithUserBody {
    #[serde(flatten)]
    pub review: ReviewBody,
    #[serde(rename = "User")]
    pub user: ReviewUserBody,
    #[serde(rename = "ReviewImages")]
    pub review_images: Vec<ReviewImageBody>,
}

/// A review with author, spot, and images, for `GET /reviews/current`.
#[derive(Debug, Serialize)]
pub struct ReviewWithSpotBody {
    #[serde(flatten)]
    pub review: ReviewBody,
    #[serde(rename = "User")]
    pub user: ReviewUserBody,
    #[serde(rename = "Spot")]
    pub spot: ReviewSpotBody,
    #[serde(rename = "ReviewImages")]
    pub review_images: Vec<ReviewImageBody>,
}

/// List responses wrap the array under the `Reviews` key.
#[derive(Debug, Serialize)]
pub struct ReviewsResponse<T> {
    #[serde(rename = "Reviews")]
    pub reviews: Vec<T>,
}

impl From<Review> for ReviewBody {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            spot_id: review.spot_id,
            user_id: review.user_id,
            review: review.review,
            stars: review.stars,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

impl From<ReviewImage> for ReviewImageBody {
    fn from(image: ReviewImage) -> Self {
        Self {
            id: image.id,
            url: image.url,
        }
    }
}

impl From<ReviewSpotSummary> for ReviewSpotBody {
    fn from(spot: ReviewSpotSummary) -> Self {
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
            price: spot.price,
            preview_image: spot.preview_image,
        }
    }
}

impl From<ReviewWithUser> for ReviewWithUserBody {
    fn from(entry: ReviewWithUser) -> Self {
        let user = ReviewUserBody {
            id: entry.review.user_id,
            first_name: entry.first_name,
            last_name: entry.last_name,
        };

        Self {
            review: entry.review.into(),
            user,
            review_images: entry.images.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ReviewWithSpot> for ReviewWithSpotBody {
    fn from(entry: ReviewWithSpot) -> Self {
        let user = ReviewUserBody {
            id: entry.review.user_id,
            first_name: entry.first_name,
            last_name: entry.last_name,
        };

        Self {
            review: entry.review.into(),
            user,
            spot: entry.spot.into(),
            review_images: entry.images.into_iter().map(Into::into).collect(),
        }
    }
}
