//! Domain primitives, aggregates and use-case services.
//!
//! Purpose: define strongly typed entities shared by the HTTP adapter, the
//! persistence adapter and the operator tooling. Types validate on
//! construction so adapters never pass unchecked strings into ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, EmailAddress, CompanyName: business accounts.
//! - Package, TrackingNumber, PackageStatus: parcels and their status.
//! - Lead, NewLead: onboarding requests from prospective customers.
//! - LoginCredentials, Registration, PasswordHash: authentication inputs.
//! - TraceId: request-scoped correlation identifier.

pub mod account_service;
pub mod admin_service;
pub mod auth;
pub mod error;
pub mod lead;
pub mod lead_service;
pub mod package;
pub mod package_service;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountService;
pub use self::admin_service::AdminDashboardService;
pub use self::auth::{
    LoginCredentials, LoginValidationError, PasswordHash, Registration,
    RegistrationValidationError,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::lead::{Lead, LeadId, LeadValidationError, NewLead};
pub use self::lead_service::LeadIntakeService;
pub use self::package::{
    NewPackage, Package, PackageId, PackageStatus, PackageValidationError, TrackingNumber,
};
pub use self::package_service::PackageService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{CompanyName, EmailAddress, User, UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use wedelivery::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("package not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
