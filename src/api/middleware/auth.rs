//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated user, inserted into request extensions for handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// On success the resolved [`CurrentUser`] is inserted into the request
/// extensions; handlers extract it with `Extension<CurrentUser>`.
///
/// # Errors
///
/// Returns `401 Unauthorized` when the header is missing, malformed, or the
/// token does not resolve to a session.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("Authentication required"))?;

    let user = st.auth_service.authenticate(&token).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
