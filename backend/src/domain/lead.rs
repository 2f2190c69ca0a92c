//! Business sales leads captured from the landing page.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum stored length of a business name.
pub const BUSINESS_NAME_MAX: usize = 100;
/// Maximum stored length of a contact person.
pub const CONTACT_PERSON_MAX: usize = 100;
/// Maximum stored length of a phone number.
pub const PHONE_MAX: usize = 20;

/// Validation errors raised when parsing a lead form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadValidationError {
    EmptyBusinessName,
    BusinessNameTooLong { max: usize },
    EmptyContactPerson,
    ContactPersonTooLong { max: usize },
    EmptyPhone,
    PhoneTooLong { max: usize },
    /// Monthly volume was missing or not a non-negative integer.
    InvalidMonthlyVolume,
}

impl fmt::Display for LeadValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBusinessName => write!(f, "business name must not be empty"),
            Self::BusinessNameTooLong { max } => {
                write!(f, "business name must be at most {max} characters")
            }
            Self::EmptyContactPerson => write!(f, "contact person must not be empty"),
            Self::ContactPersonTooLong { max } => {
                write!(f, "contact person must be at most {max} characters")
            }
            Self::EmptyPhone => write!(f, "phone must not be empty"),
            Self::PhoneTooLong { max } => write!(f, "phone must be at most {max} characters"),
            Self::InvalidMonthlyVolume => {
                write!(f, "monthly volume must be a non-negative whole number")
            }
        }
    }
}

impl std::error::Error for LeadValidationError {}

fn required(
    raw: &str,
    max: usize,
    empty: LeadValidationError,
    too_long: LeadValidationError,
) -> Result<String, LeadValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(empty);
    }
    if trimmed.chars().count() > max {
        return Err(too_long);
    }
    Ok(trimmed.to_owned())
}

/// Database-assigned lead identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(i32);

impl LeadId {
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

/// Lead awaiting insertion.
///
/// # Examples
/// ```
/// use wedelivery::domain::NewLead;
///
/// let lead = NewLead::try_from_parts("Acme", "Dana", "050-1234567", " 250 ").unwrap();
/// assert_eq!(lead.monthly_volume(), 250);
/// assert!(NewLead::try_from_parts("Acme", "Dana", "050", "lots").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    business_name: String,
    contact_person: String,
    phone: String,
    monthly_volume: i32,
}

impl NewLead {
    /// Validate raw form values.
    pub fn try_from_parts(
        business_name: &str,
        contact_person: &str,
        phone: &str,
        monthly_volume: &str,
    ) -> Result<Self, LeadValidationError> {
        let business_name = required(
            business_name,
            BUSINESS_NAME_MAX,
            LeadValidationError::EmptyBusinessName,
            LeadValidationError::BusinessNameTooLong {
                max: BUSINESS_NAME_MAX,
            },
        )?;
        let contact_person = required(
            contact_person,
            CONTACT_PERSON_MAX,
            LeadValidationError::EmptyContactPerson,
            LeadValidationError::ContactPersonTooLong {
                max: CONTACT_PERSON_MAX,
            },
        )?;
        let phone = required(
            phone,
            PHONE_MAX,
            LeadValidationError::EmptyPhone,
            LeadValidationError::PhoneTooLong { max: PHONE_MAX },
        )?;
        let monthly_volume = monthly_volume
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|volume| *volume >= 0)
            .ok_or(LeadValidationError::InvalidMonthlyVolume)?;
        Ok(Self {
            business_name,
            contact_person,
            phone,
            monthly_volume,
        })
    }

    /// Business name.
    #[must_use]
    pub fn business_name(&self) -> &str {
        self.business_name.as_str()
    }

    /// Contact person.
    #[must_use]
    pub fn contact_person(&self) -> &str {
        self.contact_person.as_str()
    }

    /// Contact phone, stored as free text.
    #[must_use]
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    /// Expected parcels per month.
    #[must_use]
    pub fn monthly_volume(&self) -> i32 {
        self.monthly_volume
    }
}

/// Stored lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub business_name: String,
    pub contact_person: String,
    pub phone: String,
    pub monthly_volume: i32,
    pub created_at: DateTime<Utc>,
}
