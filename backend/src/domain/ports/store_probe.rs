//! Driven port used by the health check to test the relational store.
use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Failure reported by a store probe.
    pub enum StoreProbeError {
        /// The store did not answer the probe query.
        Unavailable { message: String } => "{message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreProbe: Send + Sync {
    /// Run a trivial round-trip query against the store.
    async fn ping(&self) -> Result<(), StoreProbeError>;
}
