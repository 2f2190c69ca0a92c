//! Backend entry-point: loads configuration, prepares the database and
//! serves the HTTP adapter.

mod server;

use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use wedelivery::inbound::http::session_config::{BuildMode, session_settings_from_env};
use wedelivery::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use wedelivery::settings::{DatabaseSettings, ServerSettings};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    let database = DatabaseSettings::load().map_err(std::io::Error::other)?;
    let server_settings = ServerSettings::load().map_err(std::io::Error::other)?;
    let bind_addr = server_settings.socket_addr().map_err(std::io::Error::other)?;
    let database_url = database.database_url().map_err(std::io::Error::other)?;

    run_pending_migrations(&database_url)
        .await
        .map_err(std::io::Error::other)?;
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(database.pool_max_size))
        .await
        .map_err(std::io::Error::other)?;

    create_server(ServerConfig::new(session, bind_addr, pool))?.await
}
