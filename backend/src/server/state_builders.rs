//! Wires the Diesel and Argon2 adapters into the domain services backing
//! each HTTP port.

use std::sync::Arc;

use wedelivery::domain::{
    AccountService, AdminDashboardService, LeadIntakeService, PackageService,
};
use wedelivery::inbound::http::state::{HttpState, HttpStatePorts};
use wedelivery::outbound::persistence::{
    DbPool, DieselLeadRepository, DieselPackageRepository, DieselStoreProbe, DieselUserRepository,
};
use wedelivery::outbound::security::Argon2PasswordHasher;

/// Build the handler state over a shared pool.
pub(crate) fn build_http_state(pool: &DbPool) -> HttpState {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let packages = Arc::new(DieselPackageRepository::new(pool.clone()));
    let leads = Arc::new(DieselLeadRepository::new(pool.clone()));

    let accounts = Arc::new(AccountService::new(
        users,
        Arc::new(Argon2PasswordHasher::new()),
    ));
    let package_service = Arc::new(PackageService::new(Arc::clone(&packages)));

    HttpState::new(HttpStatePorts {
        login: accounts.clone(),
        registration: accounts.clone(),
        profile: accounts,
        tracking: package_service.clone(),
        package_status: package_service,
        leads: Arc::new(LeadIntakeService::new(Arc::clone(&leads))),
        admin_dashboard: Arc::new(AdminDashboardService::new(packages, leads)),
        store_probe: Arc::new(DieselStoreProbe::new(pool.clone())),
    })
}
