//! Lead intake use-case.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{LeadIntakeCommand, LeadPersistenceError, LeadRepository};
use crate::domain::{Error, Lead, NewLead};

/// Lead service implementing [`LeadIntakeCommand`].
pub struct LeadIntakeService<L> {
    leads: Arc<L>,
}

impl<L> Clone for LeadIntakeService<L> {
    fn clone(&self) -> Self {
        Self {
            leads: Arc::clone(&self.leads),
        }
    }
}

impl<L> LeadIntakeService<L> {
    /// Create a new service over the given repository.
    pub fn new(leads: Arc<L>) -> Self {
        Self { leads }
    }
}

pub(crate) fn map_lead_error(error: LeadPersistenceError) -> Error {
    match error {
        LeadPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("lead repository unavailable: {message}"))
        }
        LeadPersistenceError::Query { message } => {
            Error::internal(format!("lead repository error: {message}"))
        }
    }
}

#[async_trait]
impl<L: LeadRepository> LeadIntakeCommand for LeadIntakeService<L> {
    async fn submit(&self, lead: &NewLead) -> Result<Lead, Error> {
        let stored = self.leads.create(lead).await.map_err(map_lead_error)?;
        info!(lead_id = stored.id.as_i32(), "lead recorded");
        Ok(stored)
    }
}
