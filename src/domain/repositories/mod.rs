//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for service unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - account lookup and creation
//! - [`SessionRepository`] - bearer-token sessions
//! - [`SpotRepository`] - spot CRUD, images, and list aggregates
//! - [`ReviewRepository`] - reviews and review images

pub mod review_repository;
pub mod session_repository;
pub mod spot_repository;
pub mod user_repository;

pub use review_repository::{ReviewRepository, ReviewSpotSummary, ReviewWithSpot, ReviewWithUser};
pub use session_repository::SessionRepository;
pub use spot_repository::{SpotFilter, SpotRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use review_repository::MockReviewRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use spot_repository::MockSpotRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
