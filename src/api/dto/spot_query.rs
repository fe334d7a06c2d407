//! Query parameters for the spot list endpoint.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::domain::repositories::SpotFilter;
use crate::error::AppError;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_SIZE: i64 = 20;
const MAX_SIZE: i64 = 20;

/// Pagination and filter parameters for `GET /spots`.
///
/// Values arrive as raw strings and are parsed during validation, so a
/// malformed number gets the same structured per-field error as an
/// out-of-range one instead of an extractor-level rejection. Failures for
/// every bad parameter are reported together.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotListQuery {
    pub page: Option<String>,
    pub size: Option<String>,
    pub min_lat: Option<String>,
    pub max_lat: Option<String>,
    pub min_lng: Option<String>,
    pub max_lng: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

/// Parses an optional raw query value, recording `message` under `field` on
/// a malformed number. Absent values yield `None`.
fn parse_param<T: FromStr>(
    raw: Option<&str>,
    field: &str,
    message: &str,
    errors: &mut Map<String, Value>,
) -> Option<T> {
    match raw?.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.insert(field.to_string(), Value::String(message.to_string()));
            None
        }
    }
}

impl SpotListQuery {
    /// Validates all parameters and converts to a repository filter.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `size`: 20 (also the maximum)
    ///
    /// Returns the filter together with the effective `(page, size)` so the
    /// response can echo them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every malformed or
    /// out-of-range parameter.
    pub fn validate_into_filter(&self) -> Result<(SpotFilter, i64, i64), AppError> {
        let mut errors = Map::new();

        let page_message = "Page must be greater than or equal to 1";
        let size_message = "Size must be between 1 and 20";

        let page = parse_param::<i64>(self.page.as_deref(), "page", page_message, &mut errors)
            .unwrap_or(DEFAULT_PAGE);
        let size = parse_param::<i64>(self.size.as_deref(), "size", size_message, &mut errors)
            .unwrap_or(DEFAULT_SIZE);

        if page < 1 {
            errors.insert("page".to_string(), Value::String(page_message.to_string()));
        }

        if !(1..=MAX_SIZE).contains(&size) {
            errors.insert("size".to_string(), Value::String(size_message.to_string()));
        }

        let min_lat_message = "Minimum latitude is invalid";
        let min_lat = parse_param::<f64>(
            self.min_lat.as_deref(),
            "minLat",
            min_lat_message,
            &mut errors,
        );
        if min_lat.is_some_and(|v| !(-90.0..=90.0).contains(&v)) {
            errors.insert(
                "minLat".to_string(),
                Value::String(min_lat_message.to_string()),
            );
        }

        let max_lat_message = "Maximum latitude is invalid";
        let max_lat = parse_param::<f64>(
            self.max_lat.as_deref(),
            "maxLat",
            max_lat_message,
            &mut errors,
        );
        if max_lat.is_some_and(|v| !(-90.0..=90.0).contains(&v)) {
            errors.insert(
                "maxLat".to_string(),
                Value::String(max_lat_message.to_string()),
            );
        }

        let min_lng_message = "Minimum longitude is invalid";
        let min_lng = parse_param::<f64>(
            self.min_lng.as_deref(),
            "minLng",
            min_lng_message,
            &mut errors,
        );
        if min_lng.is_some_and(|v| !(-180.0..=180.0).contains(&v)) {
            errors.insert(
                "minLng".to_string(),
                Value::String(min_lng_message.to_string()),
            );
        }

        let max_lng_message = "Maximum longitude is invalid";
        let max_lng = parse_param::<f64>(
            self.max_lng.as_deref(),
            "maxLng",
            max_lng_message,
            &mut errors,
        );
        if max_lng.is_some_and(|v| !(-180.0..=180.0).contains(&v)) {
            errors.insert(
                "maxLng".to_string(),
                Value::String(max_lng_message.to_string()),
            );
        }

        let min_price_message = "Minimum price must be greater than or equal to 0";
        let min_price = parse_param::<f64>(
            self.min_price.as_deref(),
            "minPrice",
            min_price_message,
            &mut errors,
        );
        if min_price.is_some_and(|v| v < 0.0) {
            errors.insert(
                "minPrice".to_string(),
                Value::String(min_price_message.to_string()),
            );
        }

        let max_price_message = "Maximum price must be greater than or equal to 0";
        let max_price = parse_param::<f64>(
            self.max_price.as_deref(),
            "maxPrice",
            max_price_message,
            &mut errors,
        );
        if max_price.is_some_and(|v| v < 0.0) {
            errors.insert(
                "maxPrice".to_string(),
                Value::String(max_price_message.to_string()),
            );
        }

        if !errors.is_empty() {
            return Err(AppError::bad_request("Bad Request", errors));
        }

        let filter = SpotFilter::new(size * (page - 1), size)
            .with_lat_range(min_lat, max_lat)
            .with_lng_range(min_lng, max_lng)
            .with_price_range(min_price, max_price);

        Ok((filter, page, size))
    }
}
