//! Business account use-cases: registration, login and profile lookup.
//!
//! Password hashing is CPU-bound, so it runs on Tokio's blocking pool.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::domain::ports::{
    AccountProfileQuery, LoginService, NewAccount, PasswordHasher, PasswordHasherError,
    RegistrationService, UserPersistenceError, UserRepository,
};
use crate::domain::{EmailAddress, Error, LoginCredentials, PasswordHash, Registration, User, UserId};

/// Message returned for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Hashed on first use; unknown emails are verified against it so that they
/// cost as much as a wrong password.
const DECOY_PASSWORD: &str = "wedelivery decoy password";

/// Account service implementing the account driving ports.
pub struct AccountService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
    decoy: Arc<OnceCell<PasswordHash>>,
}

impl<U, H> Clone for AccountService<U, H> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            hasher: Arc::clone(&self.hasher),
            decoy: Arc::clone(&self.decoy),
        }
    }
}

impl<U, H> AccountService<U, H> {
    /// Create a new service over the given repository and hasher.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self {
            users,
            hasher,
            decoy: Arc::new(OnceCell::new()),
        }
    }
}

impl<U, H> AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
{
    fn map_user_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::DuplicateEmail { email } => {
                Self::email_taken(email.as_str())
            }
        }
    }

    fn map_hasher_error(error: PasswordHasherError) -> Error {
        Error::internal(error.to_string())
    }

    fn email_taken(email: &str) -> Error {
        Error::conflict("email already registered").with_details(json!({
            "field": "email",
            "value": email,
            "code": "duplicate_email",
        }))
    }

    async fn hash_password(&self, password: &str) -> Result<PasswordHash, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = zeroize::Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hasher.hash(password.as_str()))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(Self::map_hasher_error)
    }

    async fn verify_password(&self, password: &str, hash: PasswordHash) -> Result<bool, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = zeroize::Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hasher.verify(password.as_str(), &hash))
            .await
            .map_err(|err| Error::internal(format!("password verification task failed: {err}")))?
            .map_err(Self::map_hasher_error)
    }

    /// Spend one verification on the decoy hash; the outcome is discarded.
    async fn verify_against_decoy(&self, password: &str) {
        let decoy = self
            .decoy
            .get_or_try_init(|| self.hash_password(DECOY_PASSWORD))
            .await;
        let outcome = match decoy {
            Ok(hash) => self.verify_password(password, hash.clone()).await.map(drop),
            Err(err) => Err(err),
        };
        if let Err(err) = outcome {
            debug!(error = %err, "decoy verification failed");
        }
    }
}

#[async_trait]
impl<U, H> RegistrationService for AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
{
    async fn register(&self, registration: &Registration) -> Result<User, Error> {
        let existing = self
            .users
            .find_by_email(registration.email())
            .await
            .map_err(Self::map_user_error)?;
        if existing.is_some() {
            debug!("registration rejected: email already registered");
            return Err(Self::email_taken(registration.email().as_ref()));
        }

        let password_hash = self.hash_password(registration.password()).await?;
        let account = NewAccount {
            email: registration.email().clone(),
            company_name: registration.company_name().clone(),
            password_hash,
        };
        let user = self
            .users
            .create(&account)
            .await
            .map_err(Self::map_user_error)?;
        info!(user_id = %user.id(), "business account registered");
        Ok(user)
    }
}

#[async_trait]
impl<U, H> LoginService for AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let stored = match EmailAddress::new(credentials.email()) {
            Ok(email) => self
                .users
                .find_by_email(&email)
                .await
                .map_err(Self::map_user_error)?,
            Err(_) => None,
        };
        let Some(stored) = stored else {
            self.verify_against_decoy(credentials.password()).await;
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        let user_id = stored.user.id();
        if self
            .verify_password(credentials.password(), stored.password_hash)
            .await?
        {
            Ok(user_id)
        } else {
            Err(Error::unauthorized(INVALID_CREDENTIALS))
        }
    }
}

#[async_trait]
impl<U, H> AccountProfileQuery for AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
{
    async fn fetch_profile(&self, user_id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(Self::map_user_error)?
            .ok_or_else(|| Error::not_found(format!("account {user_id} not found")))
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
