//! Business account data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum stored length of an email address.
pub const EMAIL_MAX: usize = 120;
/// Maximum stored length of a company name.
pub const COMPANY_NAME_MAX: usize = 100;

/// Validation errors raised by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyEmail,
    EmailTooLong { max: usize },
    InvalidEmail,
    EmptyCompanyName,
    CompanyNameTooLong { max: usize },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmailTooLong { max } => write!(f, "email must be at most {max} characters"),
            Self::InvalidEmail => write!(f, "email must look like name@domain"),
            Self::EmptyCompanyName => write!(f, "company name must not be empty"),
            Self::CompanyNameTooLong { max } => {
                write!(f, "company name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Database-assigned account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Login email of a business account.
///
/// ## Invariants
/// - Surrounding whitespace is trimmed; case is preserved.
/// - Contains exactly one `@` with non-empty local and domain parts and no
///   inner whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    ///
    /// # Examples
    /// ```
    /// use wedelivery::domain::EmailAddress;
    ///
    /// let email = EmailAddress::new("  shop@example.com ").unwrap();
    /// assert_eq!(email.as_ref(), "shop@example.com");
    /// assert!(EmailAddress::new("shop.example.com").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if trimmed.chars().count() > EMAIL_MAX {
            return Err(UserValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(UserValidationError::InvalidEmail);
        }
        match trimmed.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(trimmed.to_owned()))
            }
            _ => Err(UserValidationError::InvalidEmail),
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registered company name, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyName(String);

impl CompanyName {
    /// Validate and construct a [`CompanyName`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyCompanyName);
        }
        if trimmed.chars().count() > COMPANY_NAME_MAX {
            return Err(UserValidationError::CompanyNameTooLong {
                max: COMPANY_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for CompanyName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<CompanyName> for String {
    fn from(value: CompanyName) -> Self {
        value.0
    }
}

impl TryFrom<String> for CompanyName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registered business account.
///
/// The password hash is deliberately absent; it only travels inside
/// [`crate::domain::ports::StoredAccount`] between the repository and the
/// login use-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    email: EmailAddress,
    company_name: CompanyName,
    created_at: DateTime<Utc>,
}

impl User {
    /// Build a user from validated parts.
    #[must_use]
    pub fn new(
        id: UserId,
        email: EmailAddress,
        company_name: CompanyName,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            company_name,
            created_at,
        }
    }

    /// Account identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Login email.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Company name supplied at registration.
    #[must_use]
    pub fn company_name(&self) -> &CompanyName {
        &self.company_name
    }

    /// Registration timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
