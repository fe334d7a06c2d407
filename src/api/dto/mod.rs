//! Data Transfer Objects for request parsing, validation, and response
//! shaping.

pub mod images;
pub mod reviews;
pub mod spot_query;
pub mod spots;
pub mod users;
