//! Register a parcel from the command line and print its tracking number.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use wedelivery::domain::ports::PackageRegistrationCommand;
use wedelivery::domain::{NewPackage, PackageService, TrackingNumber};
use wedelivery::outbound::persistence::{
    DbPool, DieselPackageRepository, PoolConfig, run_pending_migrations,
};
use wedelivery::settings::DatabaseSettings;

/// Operators run this against a freshly started stack, so allow the store
/// longer than the web server's default to accept connections.
const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// `create-package` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "create-package",
    about = "Create a package with status Received and print its tracking number",
    version
)]
struct CliArgs {
    /// Sender shown to the recipient.
    #[arg(long = "sender-name", value_name = "name")]
    sender_name: String,
    /// Delivery address.
    #[arg(long = "recipient-address", value_name = "address")]
    recipient_address: String,
    /// Explicit tracking number. A random UUID is used when omitted.
    #[arg(long = "tracking-number", value_name = "id")]
    tracking_number: Option<String>,
    /// Database connection URL. Falls back to the `DB_*` settings when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

impl CliArgs {
    fn new_package(&self) -> io::Result<NewPackage> {
        let tracking_number = match &self.tracking_number {
            Some(raw) => TrackingNumber::new(raw).map_err(io::Error::other)?,
            None => TrackingNumber::random(),
        };
        NewPackage::try_new(tracking_number, &self.sender_name, &self.recipient_address)
            .map_err(io::Error::other)
    }
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
    // `--help` and `--version` exit here with status 0.
    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(args))
}

async fn async_main(args: CliArgs) -> io::Result<()> {
    let package = args.new_package()?;

    let database_url = resolve_database_url(args.database_url)?;
    run_pending_migrations(&database_url)
        .await
        .map_err(|error| io::Error::other(format!("apply migrations: {error}")))?;
    let pool_config = PoolConfig::new(&database_url)
        .with_max_size(1)
        .with_checkout_timeout(CHECKOUT_TIMEOUT);
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;

    let command = PackageService::new(Arc::new(DieselPackageRepository::new(pool)));
    let created = command
        .register_package(&package)
        .await
        .map_err(|error| io::Error::other(format!("create package failed: {error}")))?;

    println!("{}", created.tracking_number);
    Ok(())
}

fn resolve_database_url(cli_value: Option<String>) -> io::Result<String> {
    if let Some(url) = cli_value {
        return Ok(url);
    }
    DatabaseSettings::load_from_iter([OsString::from("create-package")])
        .map_err(io::Error::other)?
        .database_url()
        .map_err(io::Error::other)
}
