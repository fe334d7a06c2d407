//! Spot image entity.

/// An image attached to a spot. At most one image per spot should carry the
/// `preview` flag; list views resolve ties by lowest id.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SpotImage {
    pub id: i64,
    pub spot_id: i64,
    pub url: String,
    pub preview: bool,
}

/// Input data for attaching an image to a spot.
#[derive(Debug, Clone)]
pub struct NewSpotImage {
    pub spot_id: i64,
    pub url: String,
    pub preview: bool,
}

/// A spot image joined with its parent spot's owner, for authorization.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SpotImageWithOwner {
    #[sqlx(flatten)]
    pub image: SpotImage,
    pub owner_id: i64,
}
