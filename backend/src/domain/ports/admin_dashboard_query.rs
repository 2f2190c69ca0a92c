//! Driving port for the admin overview.

use async_trait::async_trait;

use crate::domain::{Error, Lead, Package};

/// Packages and leads shown on the admin dashboard, each newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminDashboardSnapshot {
    pub packages: Vec<Package>,
    pub leads: Vec<Lead>,
}

/// Domain use-case port for the admin overview.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminDashboardQuery: Send + Sync {
    /// Load every package and lead.
    async fn snapshot(&self) -> Result<AdminDashboardSnapshot, Error>;
}
