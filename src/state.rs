//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{AuthService, ReviewService, SpotService, UserService};
use crate::infrastructure::persistence::{
    PgReviewRepository, PgSessionRepository, PgSpotRepository, PgUserRepository,
};

/// Service container cloned into every request.
///
/// Services are generic over repository traits; the state pins them to the
/// PostgreSQL implementations. Tests construct the same shape over a test
/// pool.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub auth_service: Arc<AuthService<PgSessionRepository, PgUserRepository>>,
    pub spot_service: Arc<SpotService<PgSpotRepository>>,
    pub review_service: Arc<ReviewService<PgReviewRepository, PgSpotRepository>>,
}

impl AppState {
    /// Wires repositories and services over a shared connection pool.
    pub fn new(pool: Arc<PgPool>, token_signing_secret: String) -> Self {
        let users = Arc::new(PgUserRepository::new(pool.clone()));
        let sessions = Arc::new(PgSessionRepository::new(pool.clone()));
        let spots = Arc::new(PgSpotRepository::new(pool.clone()));
        let reviews = Arc::new(PgReviewRepository::new(pool));

        Self {
            user_service: Arc::new(UserService::new(users.clone())),
            auth_service: Arc::new(AuthService::new(sessions, users, token_signing_secret)),
            spot_service: Arc::new(SpotService::new(spots.clone())),
            review_service: Arc::new(ReviewService::new(reviews, spots)),
        }
    }
}
