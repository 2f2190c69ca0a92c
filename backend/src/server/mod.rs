//! HTTP server assembly.
//!
//! Each worker gets the same handler state and session key. Middleware order
//! matters: `Trace` wraps the session layer so even session failures answer
//! with a `trace-id` header.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing::info;

use wedelivery::Trace;
use wedelivery::inbound::http::routes;
use wedelivery::inbound::http::session_config::SessionSettings;

use state_builders::build_http_state;

const SESSION_COOKIE: &str = "session";
const SESSION_TTL: CookieDuration = CookieDuration::hours(2);

/// Encrypted cookie session; nothing is stored server side.
fn session_middleware(settings: &SessionSettings) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), settings.key.clone())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(settings.cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(settings.same_site)
        .session_lifecycle(PersistentSession::default().session_ttl(SESSION_TTL))
        .build()
}

/// Bind the listener and return the running server future.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        session,
        bind_addr,
        db_pool,
    } = config;
    let http_state = web::Data::new(build_http_state(&db_pool));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_state.clone())
            .configure(routes::configure)
            .wrap(session_middleware(&session))
            .wrap(Trace)
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "wedelivery listening");
    Ok(server)
}
