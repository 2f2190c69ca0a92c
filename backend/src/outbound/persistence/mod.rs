//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel row structs and
//! domain types. Row structs (`models.rs`) and table definitions (`schema.rs`)
//! stay private to this module. Connections come from a `bb8` pool through
//! `diesel-async`, and every database failure maps onto the owning port's
//! error enum.
//!
//! # Example
//!
//! ```no_run
//! use wedelivery::outbound::persistence::{DbPool, DieselPackageRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), wedelivery::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgresql://user:password@db/wedelivery")).await?;
//! let packages = DieselPackageRepository::new(pool);
//! # let _ = packages;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_lead_repository;
mod diesel_package_repository;
mod diesel_store_probe;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_lead_repository::DieselLeadRepository;
pub use diesel_package_repository::DieselPackageRepository;
pub use diesel_store_probe::DieselStoreProbe;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
