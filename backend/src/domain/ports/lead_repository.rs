//! Port abstraction for lead persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Lead, NewLead};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by lead repository adapters.
    pub enum LeadPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "lead repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "lead repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Insert a lead. Leads are never deduplicated.
    async fn create(&self, lead: &NewLead) -> Result<Lead, LeadPersistenceError>;

    /// All leads ordered by creation time, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Lead>, LeadPersistenceError>;
}
