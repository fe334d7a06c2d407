//! Review image entity.

/// An image attached to a review. Capped at 10 per review.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewImage {
    pub id: i64,
    pub review_id: i64,
    pub url: String,
}

/// A review image joined with its parent review's author, for authorization.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewImageWithOwner {
    #[sqlx(flatten)]
    pub image: ReviewImage,
    pub owner_id: i64,
}
