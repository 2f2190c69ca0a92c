//! Admin dashboard query over packages and leads.

use std::sync::Arc;

use async_trait::async_trait;

use super::lead_service::map_lead_error;
use super::package_service::map_package_error;
use crate::domain::Error;
use crate::domain::ports::{
    AdminDashboardQuery, AdminDashboardSnapshot, LeadRepository, PackageRepository,
};

/// Service implementing [`AdminDashboardQuery`].
pub struct AdminDashboardService<P, L> {
    packages: Arc<P>,
    leads: Arc<L>,
}

impl<P, L> AdminDashboardService<P, L> {
    /// Create a new service over the package and lead repositories.
    pub fn new(packages: Arc<P>, leads: Arc<L>) -> Self {
        Self { packages, leads }
    }
}

#[async_trait]
impl<P, L> AdminDashboardQuery for AdminDashboardService<P, L>
where
    P: PackageRepository,
    L: LeadRepository,
{
    async fn snapshot(&self) -> Result<AdminDashboardSnapshot, Error> {
        let packages = self
            .packages
            .list_newest_first()
            .await
            .map_err(map_package_error)?;
        let leads = self
            .leads
            .list_newest_first()
            .await
            .map_err(map_lead_error)?;
        Ok(AdminDashboardSnapshot { packages, leads })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{LeadPersistenceError, MockLeadRepository, MockPackageRepository};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn snapshot_combines_both_listings() {
        let mut packages = MockPackageRepository::new();
        packages
            .expect_list_newest_first()
            .times(1)
            .return_once(|| Ok(Vec::new()));
        let mut leads = MockLeadRepository::new();
        leads
            .expect_list_newest_first()
            .times(1)
            .return_once(|| Ok(Vec::new()));

        let service = AdminDashboardService::new(Arc::new(packages), Arc::new(leads));
        let snapshot = service.snapshot().await.expect("snapshot");
        assert_eq!(snapshot, AdminDashboardSnapshot::default());
    }

    #[rstest]
    #[tokio::test]
    async fn lead_failures_abort_the_snapshot() {
        let mut packages = MockPackageRepository::new();
        packages
            .expect_list_newest_first()
            .return_once(|| Ok(Vec::new()));
        let mut leads = MockLeadRepository::new();
        leads
            .expect_list_newest_first()
            .return_once(|| Err(LeadPersistenceError::query("relation missing")));

        let service = AdminDashboardService::new(Arc::new(packages), Arc::new(leads));
        let error = service.snapshot().await.expect_err("query failure");
        assert_eq!(error.code(), ErrorCode::InternalError);
    }
}
