//! `StoreProbe` adapter that round-trips `SELECT 1` through the pool.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StoreProbe, StoreProbeError};

use super::pool::DbPool;

/// Health probe backed by the shared connection pool.
#[derive(Clone)]
pub struct DieselStoreProbe {
    pool: DbPool,
}

impl DieselStoreProbe {
    /// Create a probe over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreProbe for DieselStoreProbe {
    async fn ping(&self) -> Result<(), StoreProbeError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| StoreProbeError::unavailable(err.to_string()))?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| StoreProbeError::unavailable(err.to_string()))
    }
}
