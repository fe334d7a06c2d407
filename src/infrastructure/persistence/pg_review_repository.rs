//! PostgreSQL implementation of the review repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{NewReview, Review, ReviewImage, ReviewImageWithOwner};
use crate::domain::repositories::{
    ReviewRepository, ReviewSpotSummary, ReviewWithSpot, ReviewWithUser,
};
use crate::error::{AppError, is_unique_violation_on};

const REVIEW_UNIQUE_CONSTRAINT: &str = "reviews_spot_id_user_id_key";

/// PostgreSQL repository for reviews and review images.
pub struct PgReviewRepository {
    pool: Arc<PgPool>,
}

impl PgReviewRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Fetches images for a set of reviews and groups them by review id.
    async fn images_by_review(
        &self,
        review_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<ReviewImage>>, AppError> {
        if review_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let images = sqlx::query_as::<_, ReviewImage>(
            r#"
            SELECT id, review_id, url
            FROM review_images
            WHERE review_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(review_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut grouped: HashMap<i64, Vec<ReviewImage>> = HashMap::new();
        for image in images {
            grouped.entry(image.review_id).or_default().push(image);
        }

        Ok(grouped)
    }
}

/// Row shape for a review joined with its author.
#[derive(sqlx::FromRow)]
struct ReviewUserRow {
    #[sqlx(flatten)]
    review: Review,
    first_name: String,
    last_name: String,
}

/// Row shape for a review joined with its author and spot summary.
///
/// Spot columns are aliased with a `spot_` prefix to avoid clashing with the
/// review's own columns.
#[derive(sqlx::FromRow)]
struct ReviewSpotRow {
    id: i64,
    spot_id: i64,
    user_id: i64,
    review: String,
    stars: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    first_name: String,
    last_name: String,
    spot_owner_id: i64,
    spot_address: String,
    spot_city: String,
    spot_state: String,
    spot_country: String,
    spot_lat: f64,
    spot_lng: f64,
    spot_name: String,
    spot_price: f64,
    preview_image: Option<String>,
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn create(&self, new_review: NewReview) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (spot_id, user_id, review, stars)
            VALUES ($1, $2, $3, $4)
            RETURNING id, spot_id, user_id, review, stars, created_at, updated_at
            "#,
        )
        .bind(new_review.spot_id)
        .bind(new_review.user_id)
        .bind(&new_review.review)
        .bind(new_review.stars)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, REVIEW_UNIQUE_CONSTRAINT) {
                AppError::conflict("User already has a review for this spot")
            } else {
                e.into()
            }
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, AppError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, spot_id, user_id, review, stars, created_at, updated_at
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(review)
    }

    async fn list_by_spot(&self, spot_id: i64) -> Result<Vec<ReviewWithUser>, AppError> {
        let rows = sqlx::query_as::<_, ReviewUserRow>(
            r#"
            SELECT r.id, r.spot_id, r.user_id, r.review, r.stars,
                   r.created_at, r.updated_at,
                   u.first_name, u.last_name
            FROM reviews r
            JOIN users u ON u.id = r.user_id
            WHERE r.spot_id = $1
            ORDER BY r.id
            "#,
        )
        .bind(spot_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let review_ids: Vec<i64> = rows.iter().map(|r| r.review.id).collect();
        let mut images = self.images_by_review(&review_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| ReviewWithUser {
                images: images.remove(&row.review.id).unwrap_or_default(),
                review: row.review,
                first_name: row.first_name,
                last_name: row.last_name,
            })
            .collect())
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<ReviewWithSpot>, AppError> {
        let rows = sqlx::query_as::<_, ReviewSpotRow>(
            r#"
            SELECT r.id, r.spot_id, r.user_id, r.review, r.stars,
                   r.created_at, r.updated_at,
                   u.first_name, u.last_name,
                   s.owner_id AS spot_owner_id, s.address AS spot_address,
                   s.city AS spot_city, s.state AS spot_state,
                   s.country AS spot_country, s.lat AS spot_lat,
                   s.lng AS spot_lng, s.name AS spot_name, s.price AS spot_price,
                   (SELECT si.url FROM spot_images si
                    WHERE si.spot_id = s.id AND si.preview
                    ORDER BY si.id
                    LIMIT 1) AS preview_image
            FROM reviews r
            JOIN users u ON u.id = r.user_id
            JOIN spots s ON s.id = r.spot_id
            WHERE r.user_id = $1
            ORDER BY r.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let review_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut images = self.images_by_review(&review_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| ReviewWithSpot {
                images: images.remove(&row.id).unwrap_or_default(),
                review: Review {
                    id: row.id,
                    spot_id: row.spot_id,
                    user_id: row.user_id,
                    review: row.review,
                    stars: row.stars,
                    created_at: row.created_at,
                    updated_at: row.updated_at,
                },
                first_name: row.first_name,
                last_name: row.last_name,
                spot: ReviewSpotSummary {
                    id: row.spot_id,
                    owner_id: row.spot_owner_id,
                    address: row.spot_address,
                    city: row.spot_city,
                    state: row.spot_state,
                    country: row.spot_country,
                    lat: row.spot_lat,
                    lng: row.spot_lng,
                    name: row.spot_name,
                    price: row.spot_price,
                    preview_image: row.preview_image,
                },
            })
            .collect())
    }

    async fn add_image_capped(
        &self,
        review_id: i64,
        url: &str,
        cap: i64,
    ) -> Result<Option<ReviewImage>, AppError> {
        let mut tx = self.pool.begin().await?;

        // Lock the parent review so concurrent inserts for the same review
        // queue up; the count below then sees every committed image.
        sqlx::query("SELECT id FROM reviews WHERE id = $1 FOR UPDATE")
            .bind(review_id)
            .execute(&mut *tx)
            .await?;

        let image = sqlx::query_as::<_, ReviewImage>(
            r#"
            INSERT INTO review_images (review_id, url)
            SELECT $1::bigint, $2::text
            WHERE (SELECT COUNT(*) FROM review_images WHERE review_id = $1) < $3::bigint
            RETURNING id, review_id, url
            "#,
        )
        .bind(review_id)
        .bind(url)
        .bind(cap)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(image)
    }

    async fn find_image(&self, image_id: i64) -> Result<Option<ReviewImageWithOwner>, AppError> {
        let image = sqlx::query_as::<_, ReviewImageWithOwner>(
            r#"
            SELECT ri.id, ri.review_id, ri.url, r.user_id AS owner_id
            FROM review_images ri
            JOIN reviews r ON r.id = ri.review_id
            WHERE ri.id = $1
            "#,
        )
        .bind(image_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(image)
    }

    async fn delete_image(&self, image_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM review_images WHERE id = $1")
            .bind(image_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
