//! PostgreSQL implementation of the spot repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    NewSpot, NewSpotImage, RatingSummary, Spot, SpotImage, SpotImageWithOwner, SpotOwner,
    SpotSummary, SpotUpdate,
};
use crate::domain::repositories::{SpotFilter, SpotRepository};
use crate::error::AppError;

const SPOT_COLUMNS: &str = "id, owner_id, address, city, state, country, lat, lng, \
                            name, description, price, created_at, updated_at";

/// List query with aggregates.
///
/// The preview image is selected deterministically: the preview-flagged image
/// with the lowest id wins when several carry the flag.
const LIST_QUERY: &str = r#"
SELECT s.id, s.owner_id, s.address, s.city, s.state, s.country, s.lat, s.lng,
       s.name, s.description, s.price, s.created_at, s.updated_at,
       ROUND(AVG(r.stars)::numeric, 1)::float8 AS avg_rating,
       (SELECT si.url FROM spot_images si
        WHERE si.spot_id = s.id AND si.preview
        ORDER BY si.id
        LIMIT 1) AS preview_image
FROM spots s
LEFT JOIN reviews r ON r.spot_id = s.id
WHERE ($1::float8 IS NULL OR s.lat >= $1)
  AND ($2::float8 IS NULL OR s.lat <= $2)
  AND ($3::float8 IS NULL OR s.lng >= $3)
  AND ($4::float8 IS NULL OR s.lng <= $4)
  AND ($5::float8 IS NULL OR s.price >= $5)
  AND ($6::float8 IS NULL OR s.price <= $6)
GROUP BY s.id
ORDER BY s.id
LIMIT $7 OFFSET $8
"#;

const OWNED_LIST_QUERY: &str = r#"
SELECT s.id, s.owner_id, s.address, s.city, s.state, s.country, s.lat, s.lng,
       s.name, s.description, s.price, s.created_at, s.updated_at,
       ROUND(AVG(r.stars)::numeric, 1)::float8 AS avg_rating,
       (SELECT si.url FROM spot_images si
        WHERE si.spot_id = s.id AND si.preview
        ORDER BY si.id
        LIMIT 1) AS preview_image
FROM spots s
LEFT JOIN reviews r ON r.spot_id = s.id
WHERE s.owner_id = $1
GROUP BY s.id
ORDER BY s.id
"#;

/// PostgreSQL repository for spots and their images.
pub struct PgSpotRepository {
    pool: Arc<PgPool>,
}

impl PgSpotRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpotRepository for PgSpotRepository {
    async fn create(&self, new_spot: NewSpot) -> Result<Spot, AppError> {
        let spot = sqlx::query_as::<_, Spot>(&format!(
            r#"
            INSERT INTO spots (owner_id, address, city, state, country, lat, lng,
                               name, description, price)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {SPOT_COLUMNS}
            "#
        ))
        .bind(new_spot.owner_id)
        .bind(&new_spot.address)
        .bind(&new_spot.city)
        .bind(&new_spot.state)
        .bind(&new_spot.country)
        .bind(new_spot.lat)
        .bind(new_spot.lng)
        .bind(&new_spot.name)
        .bind(&new_spot.description)
        .bind(new_spot.price)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(spot)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Spot>, AppError> {
        let spot = sqlx::query_as::<_, Spot>(&format!(
            "SELECT {SPOT_COLUMNS} FROM spots WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(spot)
    }

    async fn update(&self, id: i64, update: SpotUpdate) -> Result<Spot, AppError> {
        let spot = sqlx::query_as::<_, Spot>(&format!(
            r#"
            UPDATE spots
            SET address = $2, city = $3, state = $4, country = $5, lat = $6,
                lng = $7, name = $8, description = $9, price = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {SPOT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&update.address)
        .bind(&update.city)
        .bind(&update.state)
        .bind(&update.country)
        .bind(update.lat)
        .bind(update.lng)
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.price)
        .fetch_optional(self.pool.as_ref())
        .await?;

        spot.ok_or_else(|| AppError::not_found("Spot couldn't be found"))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM spots WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, filter: SpotFilter) -> Result<Vec<SpotSummary>, AppError> {
        let spots = sqlx::query_as::<_, SpotSummary>(LIST_QUERY)
            .bind(filter.min_lat)
            .bind(filter.max_lat)
            .bind(filter.min_lng)
            .bind(filter.max_lng)
            .bind(filter.min_price)
            .bind(filter.max_price)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(spots)
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<SpotSummary>, AppError> {
        let spots = sqlx::query_as::<_, SpotSummary>(OWNED_LIST_QUERY)
            .bind(owner_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(spots)
    }

    async fn rating_summary(&self, spot_id: i64) -> Result<RatingSummary, AppError> {
        let summary = sqlx::query_as::<_, RatingSummary>(
            r#"
            SELECT COUNT(id) AS num_reviews,
                   ROUND(AVG(stars)::numeric, 1)::float8 AS avg_star_rating
            FROM reviews
            WHERE spot_id = $1
            "#,
        )
        .bind(spot_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(summary)
    }

    async fn images(&self, spot_id: i64) -> Result<Vec<SpotImage>, AppError> {
        let images = sqlx::query_as::<_, SpotImage>(
            r#"
            SELECT id, spot_id, url, preview
            FROM spot_images
            WHERE spot_id = $1
            ORDER BY id
            "#,
        )
        .bind(spot_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(images)
    }

    async fn owner(&self, spot_id: i64) -> Result<Option<SpotOwner>, AppError> {
        let owner = sqlx::query_as::<_, SpotOwner>(
            r#"
            SELECT u.id, u.first_name, u.last_name
            FROM spots s
            JOIN users u ON u.id = s.owner_id
            WHERE s.id = $1
            "#,
        )
        .bind(spot_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(owner)
    }

    async fn add_image(&self, new_image: NewSpotImage) -> Result<SpotImage, AppError> {
        let image = sqlx::query_as::<_, SpotImage>(
            r#"
            INSERT INTO spot_images (spot_id, url, preview)
            VALUES ($1, $2, $3)
            RETURNING id, spot_id, url, preview
            "#,
        )
        .bind(new_image.spot_id)
        .bind(&new_image.url)
        .bind(new_image.preview)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(image)
    }

    async fn find_image(&self, image_id: i64) -> Result<Option<SpotImageWithOwner>, AppError> {
        let image = sqlx::query_as::<_, SpotImageWithOwner>(
            r#"
            SELECT si.id, si.spot_id, si.url, si.preview, s.owner_id
            FROM spot_images si
            JOIN spots s ON s.id = si.spot_id
            WHERE si.id = $1
            "#,
        )
        .bind(image_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(image)
    }

    async fn delete_image(&self, image_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM spot_images WHERE id = $1")
            .bind(image_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
