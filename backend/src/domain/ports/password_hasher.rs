//! Driven port for one-way password hashing.
//!
//! Hashing is CPU-bound and synchronous; callers decide whether to move it
//! off the async executor.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hasher adapters.
    pub enum PasswordHasherError {
        /// Hash computation failed.
        Hashing { message: String } => "password hashing failed: {message}",
        /// A stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into an encoded, salted string.
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHasherError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; only unusable hashes are errors.
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHasherError>;
}
