//! Parcel data model: identifiers, tracking numbers and delivery status.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum stored length of a tracking number (a hyphenated UUID fits).
pub const TRACKING_NUMBER_MAX: usize = 36;
/// Maximum stored length of a sender name.
pub const SENDER_NAME_MAX: usize = 100;
/// Maximum stored length of a recipient address.
pub const RECIPIENT_ADDRESS_MAX: usize = 255;
/// Maximum stored length of a status label.
pub const STATUS_MAX: usize = 50;

/// Validation errors raised by the package value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageValidationError {
    EmptyTrackingNumber,
    TrackingNumberTooLong { max: usize },
    EmptySenderName,
    SenderNameTooLong { max: usize },
    EmptyRecipientAddress,
    RecipientAddressTooLong { max: usize },
    EmptyStatus,
    StatusTooLong { max: usize },
}

impl fmt::Display for PackageValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTrackingNumber => write!(f, "tracking number must not be empty"),
            Self::TrackingNumberTooLong { max } => {
                write!(f, "tracking number must be at most {max} characters")
            }
            Self::EmptySenderName => write!(f, "sender name must not be empty"),
            Self::SenderNameTooLong { max } => {
                write!(f, "sender name must be at most {max} characters")
            }
            Self::EmptyRecipientAddress => write!(f, "recipient address must not be empty"),
            Self::RecipientAddressTooLong { max } => {
                write!(f, "recipient address must be at most {max} characters")
            }
            Self::EmptyStatus => write!(f, "status must not be empty"),
            Self::StatusTooLong { max } => write!(f, "status must be at most {max} characters"),
        }
    }
}

impl std::error::Error for PackageValidationError {}

fn bounded(
    raw: &str,
    max: usize,
    empty: PackageValidationError,
    too_long: PackageValidationError,
) -> Result<String, PackageValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(empty);
    }
    if trimmed.chars().count() > max {
        return Err(too_long);
    }
    Ok(trimmed.to_owned())
}

/// Database-assigned package identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(i32);

impl PackageId {
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

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque customer-facing tracking number.
///
/// Lookups match exactly and case-sensitively; only surrounding whitespace is
/// trimmed.
///
/// # Examples
/// ```
/// use wedelivery::domain::TrackingNumber;
///
/// let tracking = TrackingNumber::new(" ABC-123 ").unwrap();
/// assert_eq!(tracking.as_ref(), "ABC-123");
/// assert_eq!(TrackingNumber::random().as_ref().len(), 36);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Validate and construct a [`TrackingNumber`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PackageValidationError> {
        bounded(
            raw.as_ref(),
            TRACKING_NUMBER_MAX,
            PackageValidationError::EmptyTrackingNumber,
            PackageValidationError::TrackingNumberTooLong {
                max: TRACKING_NUMBER_MAX,
            },
        )
        .map(Self)
    }

    /// Generate a fresh tracking number from a random UUID.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for TrackingNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<TrackingNumber> for String {
    fn from(value: TrackingNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for TrackingNumber {
    type Error = PackageValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Delivery status label.
///
/// The lifecycle `Received → In Transit → Delivered` is advisory: any
/// non-blank label is accepted and [`PackageStatus::is_recognised`] reports
/// whether it is one of the known stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageStatus(String);

impl PackageStatus {
    /// Initial status for newly created packages.
    pub const RECEIVED: &'static str = "Received";
    /// Status while the package is on its way.
    pub const IN_TRANSIT: &'static str = "In Transit";
    /// Terminal status.
    pub const DELIVERED: &'static str = "Delivered";

    const KNOWN: [&'static str; 3] = [Self::RECEIVED, Self::IN_TRANSIT, Self::DELIVERED];

    /// Validate and construct a [`PackageStatus`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PackageValidationError> {
        bounded(
            raw.as_ref(),
            STATUS_MAX,
            PackageValidationError::EmptyStatus,
            PackageValidationError::StatusTooLong { max: STATUS_MAX },
        )
        .map(Self)
    }

    /// Status assigned to new packages.
    #[must_use]
    pub fn received() -> Self {
        Self(Self::RECEIVED.to_owned())
    }

    /// Whether the label is one of the known lifecycle stages.
    #[must_use]
    pub fn is_recognised(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl AsRef<str> for PackageStatus {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PackageStatus> for String {
    fn from(value: PackageStatus) -> Self {
        value.0
    }
}

impl TryFrom<String> for PackageStatus {
    type Error = PackageValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Package awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPackage {
    tracking_number: TrackingNumber,
    sender_name: String,
    recipient_address: String,
}

impl NewPackage {
    /// Validate the parts of a package to be created.
    pub fn try_new(
        tracking_number: TrackingNumber,
        sender_name: &str,
        recipient_address: &str,
    ) -> Result<Self, PackageValidationError> {
        let sender_name = bounded(
            sender_name,
            SENDER_NAME_MAX,
            PackageValidationError::EmptySenderName,
            PackageValidationError::SenderNameTooLong {
                max: SENDER_NAME_MAX,
            },
        )?;
        let recipient_address = bounded(
            recipient_address,
            RECIPIENT_ADDRESS_MAX,
            PackageValidationError::EmptyRecipientAddress,
            PackageValidationError::RecipientAddressTooLong {
                max: RECIPIENT_ADDRESS_MAX,
            },
        )?;
        Ok(Self {
            tracking_number,
            sender_name,
            recipient_address,
        })
    }

    /// Tracking number the package will be stored under.
    #[must_use]
    pub fn tracking_number(&self) -> &TrackingNumber {
        &self.tracking_number
    }

    /// Sender name.
    #[must_use]
    pub fn sender_name(&self) -> &str {
        self.sender_name.as_str()
    }

    /// Delivery address.
    #[must_use]
    pub fn recipient_address(&self) -> &str {
        self.recipient_address.as_str()
    }
}

/// Stored package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: PackageId,
    pub tracking_number: TrackingNumber,
    pub sender_name: String,
    pub recipient_address: String,
    pub status: PackageStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Received", true)]
    #[case("In Transit", true)]
    #[case("Delivered", true)]
    #[case("delivered", false)]
    #[case("Lost at sea", false)]
    fn status_recognition(#[case] raw: &str, #[case] recognised: bool) {
        let status = PackageStatus::new(raw).expect("non-blank status");
        assert_eq!(status.is_recognised(), recognised);
    }

    #[rstest]
    fn blank_status_is_rejected() {
        assert_eq!(
            PackageStatus::new("  "),
            Err(PackageValidationError::EmptyStatus)
        );
    }

    #[rstest]
    fn tracking_number_is_case_sensitive() {
        let upper = TrackingNumber::new("ABC-123").expect("valid");
        let lower = TrackingNumber::new("abc-123").expect("valid");
        assert_ne!(upper, lower);
    }

    #[rstest]
    fn overlong_tracking_number_is_rejected() {
        assert_eq!(
            TrackingNumber::new("x".repeat(TRACKING_NUMBER_MAX + 1)),
            Err(PackageValidationError::TrackingNumberTooLong {
                max: TRACKING_NUMBER_MAX
            })
        );
    }

    #[rstest]
    fn random_tracking_numbers_are_unique_uuids() {
        let first = TrackingNumber::random();
        let second = TrackingNumber::random();
        assert_ne!(first, second);
        assert!(Uuid::parse_str(first.as_ref()).is_ok());
    }

    #[rstest]
    #[case("", "Herzl 1, Tel Aviv", PackageValidationError::EmptySenderName)]
    #[case("Dana", " ", PackageValidationError::EmptyRecipientAddress)]
    fn new_package_requires_parties(
        #[case] sender: &str,
        #[case] address: &str,
        #[case] expected: PackageValidationError,
    ) {
        let result = NewPackage::try_new(TrackingNumber::random(), sender, address);
        assert_eq!(result, Err(expected));
    }
}
