//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns such as
//! tracing and the login gate.

pub mod require_login;
pub mod trace;

pub use require_login::RequireLogin;
pub use trace::Trace;
