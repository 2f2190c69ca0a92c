//! PostgreSQL-backed `PackageRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PackagePersistenceError, PackageRepository};
use crate::domain::{NewPackage, Package, PackageId, PackageStatus, TrackingNumber};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::{NewPackageRow, PackageRow};
use super::pool::{DbPool, PoolError};
use super::schema::packages;

/// Diesel-backed implementation of the `PackageRepository` port.
#[derive(Clone)]
pub struct DieselPackageRepository {
    pool: DbPool,
}

impl DieselPackageRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PackagePersistenceError {
    PackagePersistenceError::connection(error.into_message())
}

fn map_diesel_error(
    error: diesel::result::Error,
    tracking_number: Option<&TrackingNumber>,
) -> PackagePersistenceError {
    match (classify_diesel_error(error), tracking_number) {
        (DieselFailure::Connection(message), _) => PackagePersistenceError::connection(message),
        (DieselFailure::UniqueViolation { .. }, Some(tracking)) => {
            PackagePersistenceError::duplicate_tracking_number(tracking.as_ref())
        }
        (DieselFailure::UniqueViolation { .. }, None) => {
            PackagePersistenceError::query("unexpected unique violation")
        }
        (DieselFailure::Query(message), _) => PackagePersistenceError::query(message),
    }
}

fn row_to_package(row: PackageRow) -> Result<Package, PackagePersistenceError> {
    Package::try_from(row)
        .map_err(|err| PackagePersistenceError::query(format!("stored package is invalid: {err}")))
}

#[async_trait]
impl PackageRepository for DieselPackageRepository {
    async fn create(&self, package: &NewPackage) -> Result<Package, PackagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewPackageRow {
            tracking_number: package.tracking_number().as_ref(),
            sender_name: package.sender_name(),
            recipient_address: package.recipient_address(),
            status: PackageStatus::RECEIVED,
        };

        let stored = diesel::insert_into(packages::table)
            .values(&row)
            .returning(PackageRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(package.tracking_number())))?;
        row_to_package(stored)
    }

    async fn find_by_tracking_number(
        &self,
        tracking_number: &TrackingNumber,
    ) -> Result<Option<Package>, PackagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PackageRow> = packages::table
            .filter(packages::tracking_number.eq(tracking_number.as_ref()))
            .select(PackageRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        row.map(row_to_package).transpose()
    }

    async fn update_status(
        &self,
        id: PackageId,
        status: &PackageStatus,
    ) -> Result<Option<Package>, PackagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PackageRow> = diesel::update(packages::table.find(id.as_i32()))
            .set(packages::status.eq(status.as_ref()))
            .returning(PackageRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        row.map(row_to_package).transpose()
    }

    async fn list_newest_first(&self) -> Result<Vec<Package>, PackagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PackageRow> = packages::table
            .order((packages::created_at.desc(), packages::id.desc()))
            .select(PackageRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        rows.into_iter().map(row_to_package).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[rstest]
    fn unique_violation_names_the_tracking_number() {
        let tracking = TrackingNumber::new("ABC-123").expect("tracking");
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key".to_owned()),
        );
        assert_eq!(
            map_diesel_error(error, Some(&tracking)),
            PackagePersistenceError::duplicate_tracking_number("ABC-123")
        );
    }

    #[rstest]
    fn blank_stored_status_is_reported() {
        let row = PackageRow {
            id: 1,
            tracking_number: "ABC-123".to_owned(),
            sender_name: "Dana".to_owned(),
            recipient_address: "Herzl 1".to_owned(),
            status: " ".to_owned(),
            created_at: chrono::Utc::now(),
        };
        assert!(matches!(
            row_to_package(row),
            Err(PackagePersistenceError::Query { .. })
        ));
    }
}
