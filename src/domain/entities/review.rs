//! Review entity and its input shapes.

use chrono::{DateTime, Utc};

/// A review left by a user on a spot.
///
/// At most one review exists per (spot, user) pair, enforced by a storage
/// constraint.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub spot_id: i64,
    pub user_id: i64,
    pub review: String,
    pub stars: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new review.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub spot_id: i64,
    pub user_id: i64,
    pub review: String,
    pub stars: i32,
}
