//! Route table for the HTTP adapter.
//!
//! Only `/logout`, `/dashboard` and the `/admin` scope sit behind
//! [`RequireLogin`]; everything else is public.

use actix_web::web;

use crate::inbound::http::error::payload_error;
use crate::inbound::http::{accounts, admin, health, leads, pages, webhook};
use crate::middleware::RequireLogin;

/// Upper bound on webhook payloads.
const WEBHOOK_BODY_LIMIT: usize = 256 * 1024;

/// Register every handler on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use wedelivery::inbound::http::routes;
///
/// let app = App::new().configure(routes::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(|err, _| payload_error(err)))
        .app_data(
            web::JsonConfig::default()
                .limit(WEBHOOK_BODY_LIMIT)
                .error_handler(|err, _| payload_error(err)),
        )
        .service(pages::index)
        .service(pages::track)
        .service(pages::join_us_form)
        .service(leads::submit_lead)
        .service(pages::register_form)
        .service(accounts::register)
        .service(pages::login_form)
        .service(accounts::login)
        .service(accounts::logout)
        .service(accounts::dashboard)
        .service(
            web::scope("/api")
                .service(health::health)
                .service(web::scope("/v1").service(webhook::webhook)),
        )
        .service(
            web::scope("/admin")
                .wrap(RequireLogin)
                .service(admin::admin_dashboard)
                .service(admin::update_status),
        );
}
