//! Repository trait for bearer-token sessions.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for session tokens.
///
/// Only token hashes are stored; raw tokens never touch the database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Records a new session for a user.
    async fn create(&self, user_id: i64, token_hash: &str) -> Result<(), AppError>;

    /// Resolves a token hash to its user in a single joined query.
    ///
    /// Returns `Ok(None)` when no session matches.
    async fn find_user(&self, token_hash: &str) -> Result<Option<User>, AppError>;

    /// Updates the session's `last_used_at` timestamp.
    async fn touch(&self, token_hash: &str) -> Result<(), AppError>;
}
