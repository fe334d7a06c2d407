//! Repository trait for spot listings and their images.

use crate::domain::entities::{
    NewSpot, NewSpotImage, RatingSummary, Spot, SpotImage, SpotImageWithOwner, SpotOwner,
    SpotSummary, SpotUpdate,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Filter and pagination parameters for spot list queries.
///
/// `None` bounds are not applied; each filter is independent.
#[derive(Debug, Clone, Default)]
pub struct SpotFilter {
    pub offset: i64,
    pub limit: i64,
    pub min_lat: Option<f64>,
    pub max_lat: Option<f64>,
    pub min_lng: Option<f64>,
    pub max_lng: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SpotFilter {
    /// Creates a filter with pagination only.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset,
            limit,
            ..Self::default()
        }
    }

    /// Restricts results to a latitude band.
    pub fn with_lat_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_lat = min;
        self.max_lat = max;
        self
    }

    /// Restricts results to a longitude band.
    pub fn with_lng_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_lng = min;
        self.max_lng = max;
        self
    }

    /// Restricts results to a price range.
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }
}

/// Repository interface for spots and spot images.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSpotRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpotRepository: Send + Sync {
    /// Creates a new spot.
    async fn create(&self, new_spot: NewSpot) -> Result<Spot, AppError>;

    /// Finds a spot by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Spot>, AppError>;

    /// Replaces all mutable fields of a spot and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the id does not resolve.
    async fn update(&self, id: i64, update: SpotUpdate) -> Result<Spot, AppError>;

    /// Deletes a spot; children are removed by cascade.
    ///
    /// Returns `Ok(true)` when a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Lists spots with aggregates, filtered and paginated.
    async fn list(&self, filter: SpotFilter) -> Result<Vec<SpotSummary>, AppError>;

    /// Lists all spots owned by a user, with the same aggregates as [`Self::list`].
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<SpotSummary>, AppError>;

    /// Review count and rounded average star rating for one spot.
    async fn rating_summary(&self, spot_id: i64) -> Result<RatingSummary, AppError>;

    /// All images of a spot, ordered by id.
    async fn images(&self, spot_id: i64) -> Result<Vec<SpotImage>, AppError>;

    /// Public owner fields for a spot's detail view.
    async fn owner(&self, spot_id: i64) -> Result<Option<SpotOwner>, AppError>;

    /// Attaches an image to a spot.
    async fn add_image(&self, new_image: NewSpotImage) -> Result<SpotImage, AppError>;

    /// Finds a spot image together with its parent spot's owner id.
    async fn find_image(&self, image_id: i64) -> Result<Option<SpotImageWithOwner>, AppError>;

    /// Deletes a spot image. Returns `Ok(true)` when a row was deleted.
    async fn delete_image(&self, image_id: i64) -> Result<bool, AppError>;
}
