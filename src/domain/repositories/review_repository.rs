//! Repository trait for reviews and review images.

use crate::domain::entities::{NewReview, Review, ReviewImage, ReviewImageWithOwner};
use crate::error::AppError;
use async_trait::async_trait;

/// A review joined with its author's public name fields and attached images.
#[derive(Debug, Clone)]
pub struct ReviewWithUser {
    pub review: Review,
    pub first_name: String,
    pub last_name: String,
    pub images: Vec<ReviewImage>,
}

/// Spot summary embedded in a user's review listing: all spot fields minus
/// description and timestamps, plus the resolved preview image url.
#[derive(Debug, Clone)]
pub struct ReviewSpotSummary {
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

/// A review with full context for the "my reviews" listing.
#[derive(Debug, Clone)]
pub struct ReviewWithSpot {
    pub review: Review,
    pub first_name: String,
    pub last_name: String,
    pub spot: ReviewSpotSummary,
    pub images: Vec<ReviewImage>,
}

/// Repository interface for reviews and review images.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgReviewRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Creates a new review.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the user already has a review for
    /// the spot; the (spot_id, user_id) unique constraint makes this a single
    /// conditional write with no race window.
    ///
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, new_review: NewReview) -> Result<Review, AppError>;

    /// Finds a review by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, AppError>;

    /// All reviews for a spot with reviewer names and attached images.
    async fn list_by_spot(&self, spot_id: i64) -> Result<Vec<ReviewWithUser>, AppError>;

    /// All reviews written by a user, each with its spot summary and images.
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<ReviewWithSpot>, AppError>;

    /// Attaches an image to a review unless the review already has `cap` images.
    ///
    /// Implementations must serialize the count check and insert (the
    /// PostgreSQL implementation locks the parent review row for the
    /// transaction), so concurrent requests cannot push the review past the
    /// cap. Returns `Ok(None)` when the cap was reached.
    async fn add_image_capped(
        &self,
        review_id: i64,
        url: &str,
        cap: i64,
    ) -> Result<Option<ReviewImage>, AppError>;

    /// Finds a review image together with its parent review's author id.
    async fn find_image(&self, image_id: i64) -> Result<Option<ReviewImageWithOwner>, AppError>;

    /// Deletes a review image. Returns `Ok(true)` when a row was deleted.
    async fn delete_image(&self, image_id: i64) -> Result<bool, AppError>;
}
