//! DTOs for signup and login endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::User;

/// Request body for account registration.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 4, message = "Username is required"))]
    #[validate(custom(function = "username_not_email"))]
    pub username: String,

    #[validate(length(min = 1, message = "First Name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last Name is required"))]
    pub last_name: String,

    #[validate(length(min = 6, message = "Password must be 6 characters or more"))]
    pub password: String,
}

/// Request body for login. The credential may be an email or a username.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email or username is required"))]
    pub credential: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Public projection of a user. The password hash never leaves the service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
}

/// Response for signup (201) and login (200): the safe user plus a fresh
/// session token.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: UserBody,
    pub token: String,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            username: user.username,
        }
    }
}

fn username_not_email(username: &str) -> Result<(), ValidationError> {
    if username.contains('@') {
        return Err(ValidationError::new("username_not_email")
            .with_message("Username cannot be an email".into()));
    }

    Ok(())
}
