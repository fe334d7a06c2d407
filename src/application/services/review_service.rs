//! Review service.

use std::sync::Arc;

use crate::application::services::authorize::authorize_owner;
use crate::domain::entities::{NewReview, Review, ReviewImage};
use crate::domain::repositories::{
    ReviewRepository, ReviewWithSpot, ReviewWithUser, SpotRepository,
};
use crate::error::AppError;

const SPOT_NOT_FOUND: &str = "Spot couldn't be found";
const REVIEW_NOT_FOUND: &str = "Review couldn't be found";
const REVIEW_IMAGE_NOT_FOUND: &str = "Review Image couldn't be found";

/// Maximum images a single review may carry.
pub const MAX_REVIEW_IMAGES: i64 = 10;

/// Service for reviews and review images.
pub struct ReviewService<R: ReviewRepository, S: SpotRepository> {
    reviews: Arc<R>,
    spots: Arc<S>,
}

impl<R: ReviewRepository, S: SpotRepository> ReviewService<R, S> {
    /// Creates a new review service.
    pub fn new(reviews: Arc<R>, spots: Arc<S>) -> Self {
        Self { reviews, spots }
    }

    /// All reviews written by the principal, with spot summaries and images.
    pub async fn list_mine(&self, user_id: i64) -> Result<Vec<ReviewWithSpot>, AppError> {
        self.reviews.list_by_user(user_id).await
    }

    /// All reviews for a spot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the spot does not exist; an empty
    /// list is only returned for existing spots.
    pub async fn list_by_spot(&self, spot_id: i64) -> Result<Vec<ReviewWithUser>, AppError> {
        if self.spots.find_by_id(spot_id).await?.is_none() {
            return Err(AppError::not_found(SPOT_NOT_FOUND));
        }

        self.reviews.list_by_spot(spot_id).await
    }

    /// Creates a review on a spot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the spot does not exist and
    /// [`AppError::Conflict`] when the user already reviewed it.
    pub async fn create(
        &self,
        spot_id: i64,
        user_id: i64,
        review: String,
        stars: i32,
    ) -> Result<Review, AppError> {
        if self.spots.find_by_id(spot_id).await?.is_none() {
            return Err(AppError::not_found(SPOT_NOT_FOUND));
        }

        self.reviews
            .create(NewReview {
                spot_id,
                user_id,
                review,
                stars,
            })
            .await
    }

    /// Attaches an image to a review. Author only, capped at
    /// [`MAX_REVIEW_IMAGES`] images per review.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when the cap is reached or the
    /// principal is not the author, [`AppError::NotFound`] for unknown
    /// reviews.
    pub async fn add_image(
        &self,
        review_id: i64,
        principal_id: i64,
        url: String,
    ) -> Result<ReviewImage, AppError> {
        let review = self.reviews.find_by_id(review_id).await?;
        authorize_owner(review, |r| r.user_id, principal_id, REVIEW_NOT_FOUND)?;

        self.reviews
            .add_image_capped(review_id, &url, MAX_REVIEW_IMAGES)
            .await?
            .ok_or_else(|| {
                AppError::forbidden("Maximum number of images for this resource was reached")
            })
    }

    /// Deletes a review image. Author of the parent review only.
    pub async fn delete_image(&self, image_id: i64, principal_id: i64) -> Result<(), AppError> {
        let image = self.reviews.find_image(image_id).await?;
        authorize_owner(image, |i| i.owner_id, principal_id, REVIEW_IMAGE_NOT_FOUND)?;

        self.reviews.delete_image(image_id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ReviewImageWithOwner, Spot};
    use crate::domain::repositories::{MockReviewRepository, MockSpotRepository};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn test_spot(id: i64, owner_id: i64) -> Spot {
        Spot {
            id,
            owner_id,
            address: "123 Disney Lane".to_string(),
            city: "San Francisco".to_string(),
            state: "California".to_string(),
            country: "United States of America".to_string(),
            lat: 37.7645358,
            lng: -122.4730327,
            name: "App Academy".to_string(),
            description: "Place where web developers are created".to_string(),
            price: 123.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_review(id: i64, spot_id: i64, user_id: i64) -> Review {
        Review {
            id,
            spot_id,
            user_id,
            review: "This was an awesome spot!".to_string(),
            stars: 5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_list_by_spot_missing_spot() {
        let mut mock_spots = MockSpotRepository::new();
        let mut mock_reviews = MockReviewRepository::new();

        mock_spots
            .expect_find_by_id()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(None));
        mock_reviews.expect_list_by_spot().times(0);

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_spots));

        let err = service.list_by_spot(99).await.unwrap_err();
        match err {
            AppError::NotFound { message } => assert_eq!(message, "Spot couldn't be found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_missing_spot() {
        let mut mock_spots = MockSpotRepository::new();
        let mut mock_reviews = MockReviewRepository::new();

        mock_spots
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        mock_reviews.expect_create().times(0);

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_spots));

        let err = service
            .create(99, 1, "Nice".to_string(), 4)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_passes_through_conflict() {
        let mut mock_spots = MockSpotRepository::new();
        let mut mock_reviews = MockReviewRepository::new();

        mock_spots
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_spot(id, 5))));
        mock_reviews
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::conflict("User already has a review for this spot")));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_spots));

        let err = service
            .create(1, 2, "Again".to_string(), 3)
            .await
            .unwrap_err();
        match err {
            AppError::Conflict { message, .. } => {
                assert_eq!(message, "User already has a review for this spot")
            }
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_image_by_non_author_is_forbidden() {
        let mut mock_reviews = MockReviewRepository::new();

        mock_reviews
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_review(id, 1, 2))));
        mock_reviews.expect_add_image_capped().times(0);

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(MockSpotRepository::new()));

        let err = service
            .add_image(1, 3, "https://example.com/a.jpg".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_add_image_cap_reached() {
        let mut mock_reviews = MockReviewRepository::new();

        mock_reviews
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_review(id, 1, 2))));
        mock_reviews
            .expect_add_image_capped()
            .with(eq(1), eq("https://example.com/a.jpg"), eq(MAX_REVIEW_IMAGES))
            .times(1)
            .returning(|_, _, _| Ok(None));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(MockSpotRepository::new()));

        let err = service
            .add_image(1, 2, "https://example.com/a.jpg".to_string())
            .await
            .unwrap_err();
        match err {
            AppError::Forbidden { message } => assert_eq!(
                message,
                "Maximum number of images for this resource was reached"
            ),
            other => panic!("expected Forbidden, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_image_success() {
        let mut mock_reviews = MockReviewRepository::new();

        mock_reviews
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_review(id, 1, 2))));
        mock_reviews
            .expect_add_image_capped()
            .times(1)
            .returning(|review_id, url, _| {
                Ok(Some(ReviewImage {
                    id: 7,
                    review_id,
                    url: url.to_string(),
                }))
            });

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(MockSpotRepository::new()));

        let image = service
            .add_image(1, 2, "https://example.com/a.jpg".to_string())
            .await
            .unwrap();
        assert_eq!(image.id, 7);
        assert_eq!(image.url, "https://example.com/a.jpg");
    }

    #[tokio::test]
    async fn test_delete_image_missing() {
        let mut mock_reviews = MockReviewRepository::new();

        mock_reviews
            .expect_find_image()
            .times(1)
            .returning(|_| Ok(None));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(MockSpotRepository::new()));

        let err = service.delete_image(10, 2).await.unwrap_err();
        match err {
            AppError::NotFound { message } => {
                assert_eq!(message, "Review Image couldn't be found")
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_image_by_author_succeeds() {
        let mut mock_reviews = MockReviewRepository::new();

        mock_reviews.expect_find_image().times(1).returning(|id| {
            Ok(Some(ReviewImageWithOwner {
                image: ReviewImage {
                    id,
                    review_id: 1,
                    url: "https://example.com/a.jpg".to_string(),
                },
                owner_id: 2,
            }))
        });
        mock_reviews
            .expect_delete_image()
            .with(eq(10))
            .times(1)
            .returning(|_| Ok(true));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(MockSpotRepository::new()));

        service.delete_image(10, 2).await.unwrap();
    }
}
