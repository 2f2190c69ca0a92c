//! In-memory repository doubles for HTTP behaviour suites.
//!
//! Each double keeps its rows behind `Arc<Mutex<_>>` so the world and the
//! services share one view of the store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use wedelivery::domain::ports::{
    LeadPersistenceError, LeadRepository, NewAccount, PackagePersistenceError, PackageRepository,
    StoreProbe, StoreProbeError, StoredAccount, UserPersistenceError, UserRepository,
};
use wedelivery::domain::{
    EmailAddress, Lead, LeadId, NewLead, NewPackage, Package, PackageId, PackageStatus,
    TrackingNumber, User, UserId,
};

/// Rows get strictly increasing timestamps so newest-first ordering is
/// deterministic within one test.
fn stamp(sequence: usize) -> chrono::DateTime<Utc> {
    Utc::now() + Duration::milliseconds(i64::try_from(sequence).unwrap_or(i64::MAX))
}

fn next_id(len: usize) -> i32 {
    i32::try_from(len + 1).expect("fits in i32")
}

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    rows: Arc<Mutex<Vec<StoredAccount>>>,
}

impl InMemoryUsers {
    pub fn count(&self) -> usize {
        self.rows.lock().expect("users lock").len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, account: &NewAccount) -> Result<User, UserPersistenceError> {
        let mut rows = self.rows.lock().expect("users lock");
        if rows.iter().any(|row| row.user.email() == &account.email) {
            return Err(UserPersistenceError::duplicate_email(
                account.email.to_string(),
            ));
        }
        let user = User::new(
            UserId::new(next_id(rows.len())),
            account.email.clone(),
            account.company_name.clone(),
            stamp(rows.len()),
        );
        rows.push(StoredAccount {
            user: user.clone(),
            password_hash: account.password_hash.clone(),
        });
        Ok(user)
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredAccount>, UserPersistenceError> {
        let rows = self.rows.lock().expect("users lock");
        Ok(rows.iter().find(|row| row.user.email() == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let rows = self.rows.lock().expect("users lock");
        Ok(rows
            .iter()
            .find(|row| row.user.id() == id)
            .map(|row| row.user.clone()))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryPackages {
    rows: Arc<Mutex<Vec<Package>>>,
}

impl InMemoryPackages {
    pub fn status_of(&self, tracking_number: &str) -> Option<String> {
        let rows = self.rows.lock().expect("packages lock");
        rows.iter()
            .find(|row| row.tracking_number.as_ref() == tracking_number)
            .map(|row| row.status.as_ref().to_owned())
    }

    pub fn id_of(&self, tracking_number: &str) -> Option<PackageId> {
        let rows = self.rows.lock().expect("packages lock");
        rows.iter()
            .find(|row| row.tracking_number.as_ref() == tracking_number)
            .map(|row| row.id)
    }
}

#[async_trait]
impl PackageRepository for InMemoryPackages {
    async fn create(&self, package: &NewPackage) -> Result<Package, PackagePersistenceError> {
        let mut rows = self.rows.lock().expect("packages lock");
        if rows
            .iter()
            .any(|row| &row.tracking_number == package.tracking_number())
        {
            return Err(PackagePersistenceError::duplicate_tracking_number(
                package.tracking_number().to_string(),
            ));
        }
        let stored = Package {
            id: PackageId::new(next_id(rows.len())),
            tracking_number: package.tracking_number().clone(),
            sender_name: package.sender_name().to_owned(),
            recipient_address: package.recipient_address().to_owned(),
            status: PackageStatus::received(),
            created_at: stamp(rows.len()),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_tracking_number(
        &self,
        tracking_number: &TrackingNumber,
    ) -> Result<Option<Package>, PackagePersistenceError> {
        let rows = self.rows.lock().expect("packages lock");
        Ok(rows
            .iter()
            .find(|row| &row.tracking_number == tracking_number)
            .cloned())
    }

    async fn update_status(
        &self,
        id: PackageId,
        status: &PackageStatus,
    ) -> Result<Option<Package>, PackagePersistenceError> {
        let mut rows = self.rows.lock().expect("packages lock");
        Ok(rows.iter_mut().find(|row| row.id == id).map(|row| {
            row.status = status.clone();
            row.clone()
        }))
    }

    async fn list_newest_first(&self) -> Result<Vec<Package>, PackagePersistenceError> {
        let mut rows = self.rows.lock().expect("packages lock").clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryLeads {
    rows: Arc<Mutex<Vec<Lead>>>,
}

impl InMemoryLeads {
    pub fn count(&self) -> usize {
        self.rows.lock().expect("leads lock").len()
    }

    pub fn business_names(&self) -> Vec<String> {
        let rows = self.rows.lock().expect("leads lock");
        rows.iter().map(|row| row.business_name.clone()).collect()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeads {
    async fn create(&self, lead: &NewLead) -> Result<Lead, LeadPersistenceError> {
        let mut rows = self.rows.lock().expect("leads lock");
        let stored = Lead {
            id: LeadId::new(next_id(rows.len())),
            business_name: lead.business_name().to_owned(),
            contact_person: lead.contact_person().to_owned(),
            phone: lead.phone().to_owned(),
            monthly_volume: lead.monthly_volume(),
            created_at: stamp(rows.len()),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_newest_first(&self) -> Result<Vec<Lead>, LeadPersistenceError> {
        let mut rows = self.rows.lock().expect("leads lock").clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

/// Store probe whose availability the test flips.
#[derive(Clone, Default)]
pub struct SwitchableProbe {
    down: Arc<AtomicBool>,
}

impl SwitchableProbe {
    pub fn take_down(&self) {
        self.down.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl StoreProbe for SwitchableProbe {
    async fn ping(&self) -> Result<(), StoreProbeError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(StoreProbeError::unavailable("connection refused"));
        }
        Ok(())
    }
}
