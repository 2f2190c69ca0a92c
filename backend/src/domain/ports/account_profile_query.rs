//! Driving port for the authenticated account dashboard.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading the logged-in account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountProfileQuery: Send + Sync {
    /// Return the account for `user_id`, or `not_found` when it vanished.
    async fn fetch_profile(&self, user_id: UserId) -> Result<User, Error>;
}
