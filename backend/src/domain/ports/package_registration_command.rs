//! Driving port used by operator tooling to create packages.

use async_trait::async_trait;

use crate::domain::{Error, NewPackage, Package};

/// Domain use-case port for inserting packages.
#[async_trait]
pub trait PackageRegistrationCommand: Send + Sync {
    /// Store a new package with status `Received`.
    ///
    /// A reused tracking number yields [`crate::domain::ErrorCode::Conflict`].
    async fn register_package(&self, package: &NewPackage) -> Result<Package, Error>;
}
