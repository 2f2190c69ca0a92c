//! Driving port behind `POST /login`.
use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Check an email and password pair against the stored Argon2 hash.
    ///
    /// Unknown emails and wrong passwords fail identically with
    /// [`crate::domain::ErrorCode::Unauthorized`], so callers cannot tell
    /// which accounts exist.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}
