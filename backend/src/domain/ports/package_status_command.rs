//! Driving port for the admin status update.

use async_trait::async_trait;

use crate::domain::{Error, Package, PackageId, PackageStatus};

/// Domain use-case port for changing a package's delivery status.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageStatusCommand: Send + Sync {
    /// Overwrite the status, returning the updated package.
    ///
    /// Unknown ids yield [`crate::domain::ErrorCode::NotFound`].
    async fn update_status(&self, id: PackageId, status: &PackageStatus)
    -> Result<Package, Error>;
}
