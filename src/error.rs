//! Application error type and HTTP response mapping.
//!
//! All handlers and services return [`AppError`], which renders as the JSON
//! body `{ "message": ..., "errors": { field: message } }` with the matching
//! status code. `errors` is omitted when there are no per-field details.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Map<String, Value>>,
}

#[derive(Debug)]
pub enum AppError {
    Validation {
        message: String,
        errors: Map<String, Value>,
    },
    Unauthorized {
        message: String,
    },
    Forbidden {
        message: String,
    },
    NotFound {
        message: String,
    },
    Conflict {
        message: String,
        errors: Option<Map<String, Value>>,
    },
    Internal {
        message: String,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, errors: Map<String, Value>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            errors: None,
        }
    }

    pub fn conflict_with_errors(message: impl Into<String>, errors: Map<String, Value>) -> Self {
        Self::Conflict {
            message: message.into(),
            errors: Some(errors),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Validation { message, errors } => {
                (StatusCode::BAD_REQUEST, message, Some(errors))
            }
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message, None),
            AppError::Forbidden { message } => (StatusCode::FORBIDDEN, message, None),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, None),
            AppError::Conflict { message, errors } => (StatusCode::CONFLICT, message, errors),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message, None),
        };

        let body = ErrorBody { message, errors };

        (status, Json(body)).into_response()
    }
}

/// Collects every failing field into the `errors` map, not just the first.
///
/// Field names are converted from Rust snake_case to the camelCase the JSON
/// body uses, so clients see the keys they sent.
impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let mut errors = Map::new();

        for (field, field_errors) in e.field_errors() {
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                errors.insert(snake_to_camel(&field), Value::String(message));
            }
        }

        AppError::bad_request("Bad Request", errors)
    }
}

fn snake_to_camel(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;

    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = ?e, "Database error");
        AppError::internal("Internal server error")
    }
}

/// True when `e` is a unique-constraint violation on the named constraint.
///
/// Used to turn storage-level uniqueness failures (duplicate review, duplicate
/// signup under a race) into [`AppError::Conflict`] instead of a 500.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}
