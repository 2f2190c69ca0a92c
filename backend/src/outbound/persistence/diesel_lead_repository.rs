//! PostgreSQL-backed `LeadRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LeadPersistenceError, LeadRepository};
use crate::domain::{Lead, NewLead};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::{LeadRow, NewLeadRow};
use super::pool::{DbPool, PoolError};
use super::schema::leads;

/// Diesel-backed implementation of the `LeadRepository` port.
#[derive(Clone)]
pub struct DieselLeadRepository {
    pool: DbPool,
}

impl DieselLeadRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> LeadPersistenceError {
    LeadPersistenceError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> LeadPersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => LeadPersistenceError::connection(message),
        DieselFailure::UniqueViolation { .. } => {
            LeadPersistenceError::query("unexpected unique violation")
        }
        DieselFailure::Query(message) => LeadPersistenceError::query(message),
    }
}

#[async_trait]
impl LeadRepository for DieselLeadRepository {
    async fn create(&self, lead: &NewLead) -> Result<Lead, LeadPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewLeadRow {
            business_name: lead.business_name(),
            contact_person: lead.contact_person(),
            phone: lead.phone(),
            monthly_volume: lead.monthly_volume(),
        };

        diesel::insert_into(leads::table)
            .values(&row)
            .returning(LeadRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Lead::from)
            .map_err(map_diesel_error)
    }

    async fn list_newest_first(&self) -> Result<Vec<Lead>, LeadPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<LeadRow> = leads::table
            .order((leads::created_at.desc(), leads::id.desc()))
            .select(LeadRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Lead::from).collect())
    }
}
