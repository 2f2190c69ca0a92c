//! Public pages: the landing view, parcel tracking and the form views.
//!
//! ```text
//! GET  /          landing view
//! POST /track     tracking_number=ABC-123
//! GET  /join-us   lead form view
//! GET  /register  registration form view
//! GET  /login     login form view
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Package, TrackingNumber};
use crate::inbound::http::ApiResult;
use crate::inbound::http::flash::{FlashLevel, FlashMessage, copy};
use crate::inbound::http::redirect::see_other;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Landing view: pending flashes and, after a successful lookup, the parcel.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingView {
    pub flashes: Vec<FlashMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_result: Option<Package>,
}

/// View model for the plain form pages.
#[derive(Debug, Serialize)]
pub struct FormView {
    pub flashes: Vec<FlashMessage>,
}

/// Form body for `POST /track`.
#[derive(Debug, Deserialize)]
pub struct TrackRequest {
    #[serde(default)]
    pub tracking_number: String,
}

#[get("/")]
pub async fn index(session: SessionContext) -> web::Json<LandingView> {
    web::Json(LandingView {
        flashes: session.take_flashes(),
        tracking_result: None,
    })
}

/// Look up a parcel by tracking number.
///
/// Blank and unknown numbers are indistinguishable to the caller: both flash
/// the not-found message and redirect home.
#[post("/track")]
pub async fn track(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<TrackRequest>,
) -> ApiResult<HttpResponse> {
    let found = match TrackingNumber::new(&form.tracking_number) {
        Ok(tracking_number) => state.tracking.track(&tracking_number).await?,
        Err(error) => {
            debug!(%error, "rejecting malformed tracking number");
            None
        }
    };

    let Some(package) = found else {
        session.push_flash(FlashLevel::Error, copy::TRACKING_NOT_FOUND)?;
        return Ok(see_other("/"));
    };
    Ok(HttpResponse::Ok().json(LandingView {
        flashes: session.take_flashes(),
        tracking_result: Some(package),
    }))
}

fn form_view(session: &SessionContext) -> web::Json<FormView> {
    web::Json(FormView {
        flashes: session.take_flashes(),
    })
}

#[get("/join-us")]
pub async fn join_us_form(session: SessionContext) -> web::Json<FormView> {
    form_view(&session)
}

#[get("/register")]
pub async fn register_form(session: SessionContext) -> web::Json<FormView> {
    form_view(&session)
}

#[get("/login")]
pub async fn login_form(session: SessionContext) -> web::Json<FormView> {
    form_view(&session)
}
