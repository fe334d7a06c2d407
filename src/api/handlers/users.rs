//! Handlers for signup and login.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::users::{LoginRequest, SessionResponse, SignupRequest};
use crate::application::services::Signup;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account and opens a session.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 on validation failure and 409 when the email or username is
/// already taken.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .signup(Signup {
            email: payload.email,
            username: payload.username,
            first_name: payload.first_name,
            last_name: payload.last_name,
            password: payload.password,
        })
        .await?;

    let token = state.auth_service.issue_session(user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            user: user.into(),
            token,
        }),
    ))
}

/// Opens a session for an existing account.
///
/// # Endpoint
///
/// `POST /session`
///
/// The credential may be an email or a username.
///
/// # Errors
///
/// Returns 401 on any credential mismatch, without revealing whether the
/// account exists.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    payload.validate()?;

    let (user, token) = state
        .auth_service
        .login(&payload.credential, &payload.password)
        .await?;

    Ok(Json(SessionResponse {
        user: user.into(),
        token,
    }))
}
