//! Spot listing service.

use std::sync::Arc;

use crate::application::services::authorize::authorize_owner;
use crate::domain::entities::{
    NewSpot, NewSpotImage, RatingSummary, Spot, SpotImage, SpotOwner, SpotSummary, SpotUpdate,
};
use crate::domain::repositories::{SpotFilter, SpotRepository};
use crate::error::AppError;

const SPOT_NOT_FOUND: &str = "Spot couldn't be found";
const SPOT_IMAGE_NOT_FOUND: &str = "Spot Image couldn't be found";

/// A spot with the aggregates and associations of its detail view.
#[derive(Debug, Clone)]
pub struct SpotDetail {
    pub spot: Spot,
    pub rating: RatingSummary,
    pub images: Vec<SpotImage>,
    pub owner: SpotOwner,
}

/// Service for spot listings and their images.
///
/// All mutations are guarded by [`authorize_owner`]; only a spot's owner may
/// change it or manage its images.
pub struct SpotService<R: SpotRepository> {
    spots: Arc<R>,
}

impl<R: SpotRepository> SpotService<R> {
    /// Creates a new spot service.
    pub fn new(spots: Arc<R>) -> Self {
        Self { spots }
    }

    /// Lists spots with aggregates, filtered and paginated.
    pub async fn list(&self, filter: SpotFilter) -> Result<Vec<SpotSummary>, AppError> {
        self.spots.list(filter).await
    }

    /// Lists every spot owned by the principal.
    pub async fn list_owned(&self, owner_id: i64) -> Result<Vec<SpotSummary>, AppError> {
        self.spots.list_by_owner(owner_id).await
    }

    /// Loads a spot's detail view: the spot itself, review aggregates, all
    /// images, and the owner's public fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the spot does not exist.
    pub async fn get_detail(&self, spot_id: i64) -> Result<SpotDetail, AppError> {
        let spot = self
            .spots
            .find_by_id(spot_id)
            .await?
            .ok_or_else(|| AppError::not_found(SPOT_NOT_FOUND))?;

        let rating = self.spots.rating_summary(spot_id).await?;
        let images = self.spots.images(spot_id).await?;
        let owner = self.spots.owner(spot_id).await?.ok_or_else(|| {
            tracing::error!(spot_id, "Spot exists but its owner row is missing");
            AppError::internal("Internal server error")
        })?;

        Ok(SpotDetail {
            spot,
            rating,
            images,
            owner,
        })
    }

    /// Creates a new spot owned by the principal.
    pub async fn create(&self, new_spot: NewSpot) -> Result<Spot, AppError> {
        self.spots.create(new_spot).await
    }

    /// Replaces a spot's mutable fields. Owner only.
    pub async fn update(
        &self,
        spot_id: i64,
        principal_id: i64,
        update: SpotUpdate,
    ) -> Result<Spot, AppError> {
        let spot = self.spots.find_by_id(spot_id).await?;
        authorize_owner(spot, |s| s.owner_id, principal_id, SPOT_NOT_FOUND)?;

        self.spots.update(spot_id, update).await
    }

    /// Deletes a spot and, by cascade, its images and reviews. Owner only.
    pub async fn delete(&self, spot_id: i64, principal_id: i64) -> Result<(), AppError> {
        let spot = self.spots.find_by_id(spot_id).await?;
        authorize_owner(spot, |s| s.owner_id, principal_id, SPOT_NOT_FOUND)?;

        self.spots.delete(spot_id).await?;

        Ok(())
    }

    /// Attaches an image to a spot. Owner only.
    pub async fn add_image(
        &self,
        spot_id: i64,
        principal_id: i64,
        url: String,
        preview: bool,
    ) -> Result<SpotImage, AppError> {
        let spot = self.spots.find_by_id(spot_id).await?;
        authorize_owner(spot, |s| s.owner_id, principal_id, SPOT_NOT_FOUND)?;

        self.spots
            .add_image(NewSpotImage {
                spot_id,
                url,
                preview,
            })
            .await
    }

    /// Deletes a spot image. Owner of the parent spot only.
    pub async fn delete_image(&self, image_id: i64, principal_id: i64) -> Result<(), AppError> {
        let image = self.spots.find_image(image_id).await?;
        authorize_owner(image, |i| i.owner_id, principal_id, SPOT_IMAGE_NOT_FOUND)?;

        self.spots.delete_image(image_id).await?;

        Ok(())
    }
}
