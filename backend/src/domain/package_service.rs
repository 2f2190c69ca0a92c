//! Package use-cases: public tracking, admin status updates and operator
//! registration.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    PackagePersistenceError, PackageRegistrationCommand, PackageRepository,
    PackageStatusCommand, PackageTrackingQuery,
};
use crate::domain::{Error, NewPackage, Package, PackageId, PackageStatus, TrackingNumber};

/// Package service implementing the package driving ports.
pub struct PackageService<P> {
    packages: Arc<P>,
}

impl<P> Clone for PackageService<P> {
    fn clone(&self) -> Self {
        Self {
            packages: Arc::clone(&self.packages),
        }
    }
}

impl<P> PackageService<P> {
    /// Create a new service over the given repository.
    pub fn new(packages: Arc<P>) -> Self {
        Self { packages }
    }
}

pub(crate) fn map_package_error(error: PackagePersistenceError) -> Error {
    match error {
        PackagePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("package repository unavailable: {message}"))
        }
        PackagePersistenceError::Query { message } => {
            Error::internal(format!("package repository error: {message}"))
        }
        PackagePersistenceError::DuplicateTrackingNumber { tracking_number } => {
            Error::conflict("tracking number already in use").with_details(json!({
                "field": "trackingNumber",
                "value": tracking_number,
                "code": "duplicate_tracking_number",
            }))
        }
    }
}

#[async_trait]
impl<P: PackageRepository> PackageTrackingQuery for PackageService<P> {
    async fn track(&self, tracking_number: &TrackingNumber) -> Result<Option<Package>, Error> {
        self.packages
            .find_by_tracking_number(tracking_number)
            .await
            .map_err(map_package_error)
    }
}

#[async_trait]
impl<P: PackageRepository> PackageStatusCommand for PackageService<P> {
    async fn update_status(
        &self,
        id: PackageId,
        status: &PackageStatus,
    ) -> Result<Package, Error> {
        if !status.is_recognised() {
            warn!(package_id = %id, %status, "applying unrecognised package status");
        }
        let updated = self
            .packages
            .update_status(id, status)
            .await
            .map_err(map_package_error)?
            .ok_or_else(|| {
                Error::not_found(format!("package {id} not found"))
                    .with_details(json!({ "packageId": id.as_i32() }))
            })?;
        info!(package_id = %id, %status, "package status updated");
        Ok(updated)
    }
}

#[async_trait]
impl<P: PackageRepository> PackageRegistrationCommand for PackageService<P> {
    async fn register_package(&self, package: &NewPackage) -> Result<Package, Error> {
        let created = self
            .packages
            .create(package)
            .await
            .map_err(map_package_error)?;
        info!(package_id = %created.id, tracking_number = %created.tracking_number, "package created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockPackageRepository;
    use chrono::{DateTime, Utc};
    use rstest::{fixture, rstest};

    fn make_service(repo: MockPackageRepository) -> PackageService<MockPackageRepository> {
        PackageService::new(Arc::new(repo))
    }

    #[fixture]
    fn parcel() -> Package {
        Package {
            id: PackageId::new(3),
            tracking_number: TrackingNumber::new("ABC-123").expect("tracking"),
            sender_name: "Dana".to_owned(),
            recipient_address: "Herzl 1, Tel Aviv".to_owned(),
            status: PackageStatus::received(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn track_returns_none_for_unknown_numbers() {
        let mut repo = MockPackageRepository::new();
        repo.expect_find_by_tracking_number()
            .withf(|tracking| tracking.as_ref() == "ABC-123")
            .times(1)
            .return_once(|_| Ok(None));

        let tracking = TrackingNumber::new("ABC-123").expect("tracking");
        let found = make_service(repo).track(&tracking).await.expect("lookup");
        assert!(found.is_none());
    }

    #[rstest]
    #[case("Delivered")]
    #[case("Held at customs")]
    #[tokio::test]
    async fn update_status_accepts_any_label(parcel: Package, #[case] label: &str) {
        let status = PackageStatus::new(label).expect("status");
        let expected = status.clone();
        let mut repo = MockPackageRepository::new();
        repo.expect_update_status()
            .withf(move |id, s| *id == PackageId::new(3) && *s == expected)
            .times(1)
            .return_once(move |_, s| {
                Ok(Some(Package {
                    status: s.clone(),
                    ..parcel
                }))
            });

        let updated = make_service(repo)
            .update_status(PackageId::new(3), &status)
            .await
            .expect("update succeeds");
        assert_eq!(updated.status.as_ref(), label);
    }

    #[rstest]
    #[tokio::test]
    async fn update_status_reports_missing_package() {
        let mut repo = MockPackageRepository::new();
        repo.expect_update_status().return_once(|_, _| Ok(None));

        let error = make_service(repo)
            .update_status(PackageId::new(404), &PackageStatus::received())
            .await
            .expect_err("missing package");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn register_maps_duplicate_tracking_numbers_to_conflict() {
        let mut repo = MockPackageRepository::new();
        repo.expect_create().return_once(|_| {
            Err(PackagePersistenceError::duplicate_tracking_number("ABC-123"))
        });
        let package = NewPackage::try_new(
            TrackingNumber::new("ABC-123").expect("tracking"),
            "Dana",
            "Herzl 1",
        )
        .expect("valid package");

        let error = make_service(repo)
            .register_package(&package)
            .await
            .expect_err("duplicate");
        assert_eq!(error.code(), ErrorCode::Conflict);
    }

    #[rstest]
    #[tokio::test]
    async fn connection_failures_are_service_unavailable() {
        let mut repo = MockPackageRepository::new();
        repo.expect_find_by_tracking_number()
            .return_once(|_| Err(PackagePersistenceError::connection("pool timed out")));

        let tracking = TrackingNumber::random();
        let error = make_service(repo)
            .track(&tracking)
            .await
            .expect_err("connection failure");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }
}
