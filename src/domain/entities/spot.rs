//! Spot entity representing a rentable property listing.

use chrono::{DateTime, Utc};

/// A rentable property listing owned by a user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Spot {
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

/// Input data for creating a new spot.
#[derive(Debug, Clone)]
pub struct NewSpot {
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
}

/// Full replacement of a spot's mutable fields (PUT semantics).
#[derive(Debug, Clone)]
pub struct SpotUpdate {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// A spot annotated with list-view aggregates.
///
/// `avg_rating` is the review-star mean rounded to one decimal, `None` when
/// the spot has no reviews. `preview_image` is the url of the preview-flagged
/// image with the lowest id, `None` when no image is flagged.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SpotSummary {
    #[sqlx(flatten)]
    pub spot: Spot,
    pub avg_rating: Option<f64>,
    pub preview_image: Option<String>,
}

/// Aggregate review figures for a single spot's detail view.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct RatingSummary {
    pub num_reviews: i64,
    pub avg_star_rating: Option<f64>,
}

/// Public owner fields embedded in a spot's detail view.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SpotOwner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}
