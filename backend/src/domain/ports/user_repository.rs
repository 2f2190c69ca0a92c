//! Port abstraction for business account persistence and its errors.
use async_trait::async_trait;

use crate::domain::{CompanyName, EmailAddress, PasswordHash, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The email is already registered.
        DuplicateEmail { email: String } => "email already registered: {email}",
    }
}

/// Account row ready for insertion; the password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: EmailAddress,
    pub company_name: CompanyName,
    pub password_hash: PasswordHash,
}

/// Stored account together with its password hash.
///
/// Only the login use-case sees this type; everything else works with
/// [`User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAccount {
    pub user: User,
    pub password_hash: PasswordHash,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account.
    ///
    /// Returns [`UserPersistenceError::DuplicateEmail`] when the unique email
    /// constraint rejects the row.
    async fn create(&self, account: &NewAccount) -> Result<User, UserPersistenceError>;

    /// Fetch an account and its hash by exact email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredAccount>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;
}
