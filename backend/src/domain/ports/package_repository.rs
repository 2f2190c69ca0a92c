//! Port abstraction for package persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewPackage, Package, PackageId, PackageStatus, TrackingNumber};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by package repository adapters.
    pub enum PackagePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "package repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "package repository query failed: {message}",
        /// Another package already uses the tracking number.
        DuplicateTrackingNumber { tracking_number: String } =>
            "tracking number already in use: {tracking_number}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Insert a package with the initial status.
    async fn create(&self, package: &NewPackage) -> Result<Package, PackagePersistenceError>;

    /// Exact, case-sensitive lookup by tracking number.
    async fn find_by_tracking_number(
        &self,
        tracking_number: &TrackingNumber,
    ) -> Result<Option<Package>, PackagePersistenceError>;

    /// Overwrite the status of one package.
    ///
    /// Returns `Ok(None)` without touching any row when the id is unknown.
    async fn update_status(
        &self,
        id: PackageId,
        status: &PackageStatus,
    ) -> Result<Option<Package>, PackagePersistenceError>;

    /// All packages ordered by creation time, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Package>, PackagePersistenceError>;
}
