//! Driving port for the "join us" lead form.

use async_trait::async_trait;

use crate::domain::{Error, Lead, NewLead};

/// Domain use-case port for recording sales leads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadIntakeCommand: Send + Sync {
    /// Persist a lead and return the stored record.
    async fn submit(&self, lead: &NewLead) -> Result<Lead, Error>;
}
