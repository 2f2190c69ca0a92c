//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories, the password hasher and the store probe) are
//! implemented by outbound adapters. Driving ports are the use-cases inbound
//! adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod account_profile_query;
mod admin_dashboard_query;
mod lead_intake_command;
mod lead_repository;
mod login_service;
mod package_registration_command;
mod package_repository;
mod package_status_command;
mod package_tracking_query;
mod password_hasher;
mod registration_service;
mod store_probe;
mod user_repository;

pub use account_profile_query::AccountProfileQuery;
#[cfg(test)]
pub use account_profile_query::MockAccountProfileQuery;
pub use admin_dashboard_query::{AdminDashboardQuery, AdminDashboardSnapshot};
#[cfg(test)]
pub use admin_dashboard_query::MockAdminDashboardQuery;
pub use lead_intake_command::LeadIntakeCommand;
#[cfg(test)]
pub use lead_intake_command::MockLeadIntakeCommand;
#[cfg(test)]
pub use lead_repository::MockLeadRepository;
pub use lead_repository::{LeadPersistenceError, LeadRepository};
pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use package_registration_command::PackageRegistrationCommand;
#[cfg(test)]
pub use package_repository::MockPackageRepository;
pub use package_repository::{PackagePersistenceError, PackageRepository};
#[cfg(test)]
pub use package_status_command::MockPackageStatusCommand;
pub use package_status_command::PackageStatusCommand;
#[cfg(test)]
pub use package_tracking_query::MockPackageTrackingQuery;
pub use package_tracking_query::PackageTrackingQuery;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHasher, PasswordHasherError};
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::RegistrationService;
#[cfg(test)]
pub use store_probe::MockStoreProbe;
pub use store_probe::{StoreProbe, StoreProbeError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{NewAccount, StoredAccount, UserPersistenceError, UserRepository};
