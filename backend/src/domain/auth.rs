//! Authentication primitives: login credentials, registration requests and
//! stored password hashes.
//!
//! Inbound payload parsing stays outside the domain; these constructors
//! validate raw strings before a handler talks to a port.

use std::fmt;

use zeroize::Zeroizing;

use super::{CompanyName, EmailAddress, UserValidationError};

/// Validation errors for login payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Login credentials as typed by the user.
///
/// ## Invariants
/// - `email` is trimmed and non-empty. It is not format-checked so a
///   malformed address fails like any other unknown account.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use wedelivery::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" shop@example.com ", "s3cret").unwrap();
/// assert_eq!(creds.email(), "shop@example.com");
/// assert_eq!(creds.password(), "s3cret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for the account lookup.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validation errors for registration payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    /// Email or company name failed validation.
    Account(UserValidationError),
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(err) => err.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

impl From<UserValidationError> for RegistrationValidationError {
    fn from(value: UserValidationError) -> Self {
        Self::Account(value)
    }
}

/// Validated request to open a business account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    email: EmailAddress,
    company_name: CompanyName,
    password: Zeroizing<String>,
}

impl Registration {
    /// Construct a registration from raw form values.
    pub fn try_from_parts(
        email: &str,
        company_name: &str,
        password: &str,
    ) -> Result<Self, RegistrationValidationError> {
        let email = EmailAddress::new(email)?;
        let company_name = CompanyName::new(company_name)?;
        if password.is_empty() {
            return Err(RegistrationValidationError::EmptyPassword);
        }
        Ok(Self {
            email,
            company_name,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email the account will log in with.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Company name for the account.
    #[must_use]
    pub fn company_name(&self) -> &CompanyName {
        &self.company_name
    }

    /// Plaintext password; only ever handed to a password hasher.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Encoded password hash (PHC string) as persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash produced by a password hasher.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}
