//! Bearer-token authentication service.

use std::sync::Arc;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::entities::User;
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::password::verify_password;
use crate::utils::token::generate_token;

type HmacSha256 = Hmac<Sha256>;

/// Service for issuing and resolving session tokens.
///
/// Raw tokens are returned to the client once and never stored; the database
/// holds only their keyed HMAC-SHA256 digests, so a leaked sessions table
/// cannot be replayed.
pub struct AuthService<S: SessionRepository, U: UserRepository> {
    sessions: Arc<S>,
    users: Arc<U>,
    signing_secret: String,
}

impl<S: SessionRepository, U: UserRepository> AuthService<S, U> {
    /// Creates a new auth service.
    pub fn new(sessions: Arc<S>, users: Arc<U>, signing_secret: String) -> Self {
        Self {
            sessions,
            users,
            signing_secret,
        }
    }

    /// Keyed digest of a raw token, hex-encoded for storage and lookup.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Issues a fresh session for a user and returns the raw token.
    pub async fn issue_session(&self, user_id: i64) -> Result<String, AppError> {
        let token = generate_token();

        self.sessions.create(user_id, &self.hash_token(&token)).await?;

        Ok(token)
    }

    /// Resolves a bearer token to its user and marks the session as used.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when no session matches the token.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let token_hash = self.hash_token(token);

        let user = self
            .sessions
            .find_user(&token_hash)
            .await?
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        self.sessions.touch(&token_hash).await?;

        Ok(user)
    }

    /// Verifies a credential/password pair and opens a session.
    ///
    /// The credential may be an email or a username. The same error is
    /// returned for unknown accounts and wrong passwords.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on any credential mismatch.
    pub async fn login(&self, credential: &str, password: &str) -> Result<(User, String), AppError> {
        let user = match self.users.find_by_email(credential).await? {
            Some(user) => Some(user),
            None => self.users.find_by_username(credential).await?,
        };

        let user = user.ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        if !verify_password(password, &user.hashed_password) {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let token = self.issue_session(user.id).await?;

        Ok((user, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockSessionRepository, MockUserRepository};
    use crate::utils::password::hash_password;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn test_user(id: i64, password: &str) -> User {
        User {
            id,
            email: "demo@example.com".to_string(),
            username: "demo".to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            hashed_password: hash_password(password).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(
        sessions: MockSessionRepository,
        users: MockUserRepository,
    ) -> AuthService<MockSessionRepository, MockUserRepository> {
        AuthService::new(Arc::new(sessions), Arc::new(users), "test-secret".to_string())
    }

    #[tokio::test]
    async fn test_issue_session_stores_hash_not_token() {
        let mut mock_sessions = MockSessionRepository::new();

        mock_sessions
            .expect_create()
            .with(eq(1), mockall::predicate::always())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(mock_sessions, MockUserRepository::new());

        let token = service.issue_session(1).await.unwrap();
        assert_eq!(token.len(), 43);
        // 64 hex chars, never equal to the raw token
        assert_eq!(service.hash_token(&token).len(), 64);
        assert_ne!(service.hash_token(&token), token);
    }

    #[tokio::test]
    async fn test_authenticate_unknown_token() {
        let mut mock_sessions = MockSessionRepository::new();

        mock_sessions
            .expect_find_user()
            .times(1)
            .returning(|_| Ok(None));
        mock_sessions.expect_touch().times(0);

        let service = service(mock_sessions, MockUserRepository::new());

        let err = service.authenticate("bogus").await.unwrap_err();
        match err {
            AppError::Unauthorized { message } => assert_eq!(message, "Authentication required"),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_authenticate_touches_session() {
        let mut mock_sessions = MockSessionRepository::new();

        mock_sessions
            .expect_find_user()
            .times(1)
            .returning(|_| Ok(Some(test_user(3, "secret1"))));
        mock_sessions.expect_touch().times(1).returning(|_| Ok(()));

        let service = service(mock_sessions, MockUserRepository::new());

        let user = service.authenticate("some-token").await.unwrap();
        assert_eq!(user.id, 3);
    }

    #[tokio::test]
    async fn test_login_by_username_fallback() {
        let mut mock_sessions = MockSessionRepository::new();
        let mut mock_users = MockUserRepository::new();

        mock_users
            .expect_find_by_email()
            .with(eq("demo"))
            .times(1)
            .returning(|_| Ok(None));
        mock_users
            .expect_find_by_username()
            .with(eq("demo"))
            .times(1)
            .returning(|_| Ok(Some(test_user(1, "secret1"))));
        mock_sessions.expect_create().times(1).returning(|_, _| Ok(()));

        let service = service(mock_sessions, mock_users);

        let (user, token) = service.login("demo", "secret1").await.unwrap();
        assert_eq!(user.id, 1);
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut mock_users = MockUserRepository::new();

        mock_users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(test_user(1, "secret1"))));

        let service = service(MockSessionRepository::new(), mock_users);

        let err = service.login("demo@example.com", "wrong").await.unwrap_err();
        match err {
            AppError::Unauthorized { message } => assert_eq!(message, "Invalid credentials"),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_unknown_account_same_error() {
        let mut mock_users = MockUserRepository::new();

        mock_users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        mock_users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(MockSessionRepository::new(), mock_users);

        let err = service.login("ghost", "secret1").await.unwrap_err();
        match err {
            AppError::Unauthorized { message } => assert_eq!(message, "Invalid credentials"),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }
}
