//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation inputs
//! use separate `New*` structs; `SpotUpdate` carries the full-replacement
//! shape for PUT.

pub mod review;
pub mod review_image;
pub mod spot;
pub mod spot_image;
pub mod user;

pub use review::{NewReview, Review};
pub use review_image::{ReviewImage, ReviewImageWithOwner};
pub use spot::{NewSpot, RatingSummary, Spot, SpotOwner, SpotSummary, SpotUpdate};
pub use spot_image::{NewSpotImage, SpotImage, SpotImageWithOwner};
pub use user::{NewUser, User};
