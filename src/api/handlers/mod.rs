//! HTTP request handlers.

pub mod review_images;
pub mod reviews;
pub mod spot_images;
pub mod spots;
pub mod users;

pub use review_images::{add_review_image_handler, delete_review_image_handler};
pub use reviews::{create_review_handler, my_reviews_handler, spot_reviews_handler};
pub use spot_images::{add_spot_image_handler, delete_spot_image_handler};
pub use spots::{
    create_spot_handler, delete_spot_handler, list_spots_handler, owned_spots_handler,
    spot_detail_handler, update_spot_handler,
};
pub use users::{login_handler, signup_handler};
