//! User signup service.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;

/// Validated signup input (plaintext password, hashed before storage).
#[derive(Debug, Clone)]
pub struct Signup {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Service for registering new accounts.
pub struct UserService<U: UserRepository> {
    users: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Creates a new user service.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Registers a new account.
    ///
    /// Checks email and username uniqueness before hashing; both collisions
    /// are reported together in the distinguished "User already exists"
    /// shape. The storage-level unique indexes close the remaining race
    /// window (see [`UserRepository::create`]).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a duplicate email or username.
    pub async fn signup(&self, signup: Signup) -> Result<User, AppError> {
        let mut errors = Map::new();

        if self.users.find_by_email(&signup.email).await?.is_some() {
            errors.insert(
                "email".to_string(),
                Value::String("User with that email already exists".to_string()),
            );
        }

        if self
            .users
            .find_by_username(&signup.username)
            .await?
            .is_some()
        {
            errors.insert(
                "username".to_string(),
                Value::String("User with that username already exists".to_string()),
            );
        }

        if !errors.is_empty() {
            return Err(AppError::conflict_with_errors("User already exists", errors));
        }

        let hashed_password = hash_password(&signup.password)?;

        self.users
            .create(NewUser {
                email: signup.email,
                username: signup.username,
                first_name: signup.first_name,
                last_name: signup.last_name,
                hashed_password,
            })
            .await
    }
}
