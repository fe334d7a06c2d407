//! Application services implementing the business rules.

pub mod auth_service;
pub mod authorize;
pub mod review_service;
pub mod spot_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use authorize::authorize_owner;
pub use review_service::{MAX_REVIEW_IMAGES, ReviewService};
pub use spot_service::{SpotDetail, SpotService};
pub use user_service::{Signup, UserService};
