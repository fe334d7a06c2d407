//! Ownership-based authorization guard.

use crate::error::AppError;

/// Resolves a loaded resource against the requesting principal.
///
/// One guard serves every resource type: callers supply the loaded resource
/// (`None` when the id did not resolve), an owner-id extractor, and the
/// resource-specific not-found message. Returns the resource for downstream
/// use so the handler never loads it twice.
///
/// # Errors
///
/// - [`AppError::NotFound`] with `not_found_message` when the resource is absent
/// - [`AppError::Forbidden`] when the owner id differs from `principal_id`
pub fn authorize_owner<T>(
    resource: Option<T>,
    owner_of: impl FnOnce(&T) -> i64,
    principal_id: i64,
    not_found_message: &str,
) -> Result<T, AppError> {
    let resource = resource.ok_or_else(|| AppError::not_found(not_found_message))?;

    if owner_of(&resource) != principal_id {
        return Err(AppError::forbidden("Forbidden"));
    }

    Ok(resource)
}
