//! Driving port for public package tracking.

use async_trait::async_trait;

use crate::domain::{Error, Package, TrackingNumber};

/// Domain use-case port for customer tracking lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageTrackingQuery: Send + Sync {
    /// Look up a package by exact tracking number.
    async fn track(&self, tracking_number: &TrackingNumber) -> Result<Option<Package>, Error>;
}
