//! DTOs for spot and review image endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for attaching an image to a spot.
#[derive(Debug, Deserialize, Validate)]
pub struct SpotImageRequest {
    #[validate(length(min = 1, message = "URL is required"))]
    #[validate(url(message = "Must be a valid URL"))]
    pub url: String,

    #[serde(default)]
    pub preview: bool,
}

/// Request body for attaching an image to a review.
#[derive(Debug, Deserialize, Validate)]
pub struct ReviewImageRequest {
    #[validate(length(min = 1, message = "URL is required"))]
    #[validate(url(message = "Must be a valid URL"))]
    pub url: String,
}

/// Response after attaching an image to a spot.
#[derive(Debug, Serialize)]
pub struct SpotImageResponse {
    pub id: i64,
    pub url: String,
    pub preview: bool,
}

/// Response after attaching an image to a review.
#[derive(Debug, Serialize)]
pub struct ReviewImageResponse {
    pub id: i64,
    pub url: String,
}

/// Body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

impl DeletedResponse {
    pub fn new() -> Self {
        Self {
            message: "Successfully deleted",
        }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}
