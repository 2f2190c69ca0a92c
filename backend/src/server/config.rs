//! Startup inputs for [`super::create_server`].

use std::net::SocketAddr;

use wedelivery::inbound::http::session_config::SessionSettings;
use wedelivery::outbound::persistence::DbPool;

/// Validated session cookie settings, the listener address and the pool the
/// adapters share.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            session,
            bind_addr,
            db_pool,
        }
    }
}
