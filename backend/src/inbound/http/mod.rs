//! HTTP inbound adapter: form-style handlers returning JSON views and `303`
//! redirects, backed by a cookie session.

pub mod accounts;
pub mod admin;
pub mod error;
pub mod flash;
pub mod health;
pub mod leads;
pub mod pages;
pub mod redirect;
pub mod routes;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod webhook;

pub use error::ApiResult;
