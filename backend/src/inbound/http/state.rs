//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountProfileQuery, AdminDashboardQuery, LeadIntakeCommand, LoginService,
    PackageStatusCommand, PackageTrackingQuery, RegistrationService, StoreProbe,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub profile: Arc<dyn AccountProfileQuery>,
    pub tracking: Arc<dyn PackageTrackingQuery>,
    pub package_status: Arc<dyn PackageStatusCommand>,
    pub leads: Arc<dyn LeadIntakeCommand>,
    pub admin_dashboard: Arc<dyn AdminDashboardQuery>,
    pub store_probe: Arc<dyn StoreProbe>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub profile: Arc<dyn AccountProfileQuery>,
    pub tracking: Arc<dyn PackageTrackingQuery>,
    pub package_status: Arc<dyn PackageStatusCommand>,
    pub leads: Arc<dyn LeadIntakeCommand>,
    pub admin_dashboard: Arc<dyn AdminDashboardQuery>,
    pub store_probe: Arc<dyn StoreProbe>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            registration,
            profile,
            tracking,
            package_status,
            leads,
            admin_dashboard,
            store_probe,
        } = ports;
        Self {
            login,
            registration,
            profile,
            tracking,
            package_status,
            leads,
            admin_dashboard,
            store_probe,
        }
    }
}
