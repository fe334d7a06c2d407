//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits over a shared
//! `sqlx::PgPool`.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - account storage and lookups
//! - [`PgSessionRepository`] - bearer-token sessions
//! - [`PgSpotRepository`] - spots, spot images, list aggregates
//! - [`PgReviewRepository`] - reviews and review images

pub mod pg_review_repository;
pub mod pg_session_repository;
pub mod pg_spot_repository;
pub mod pg_user_repository;

pub use pg_review_repository::PgReviewRepository;
pub use pg_session_repository::PgSessionRepository;
pub use pg_spot_repository::PgSpotRepository;
pub use pg_user_repository::PgUserRepository;
