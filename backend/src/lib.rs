//! WeDelivery backend library modules.
//!
//! Hexagonal layout: `domain` holds entities, ports and services; `inbound`
//! adapts HTTP requests onto the driving ports; `outbound` implements the
//! driven ports over PostgreSQL and Argon2.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use domain::TraceId;
pub use middleware::{RequireLogin, Trace};
