//! Driving port for opening business accounts.

use async_trait::async_trait;

use crate::domain::{Error, Registration, User};

/// Domain use-case port for account registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Hash the password and create the account.
    ///
    /// A taken email yields [`crate::domain::ErrorCode::Conflict`] and creates
    /// nothing.
    async fn register(&self, registration: &Registration) -> Result<User, Error>;
}
