//! Admin handlers, mounted under `/admin` behind [`crate::middleware::RequireLogin`].
//!
//! ```text
//! GET  /admin/dashboard
//! POST /admin/update_status/{package_id}  status=In Transit
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::AdminDashboardSnapshot;
use crate::domain::{Lead, Package, PackageId, PackageStatus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::invalid_field;
use crate::inbound::http::flash::{FlashLevel, FlashMessage, copy};
use crate::inbound::http::redirect::see_other;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Every package and lead, newest first.
#[derive(Debug, Serialize)]
pub struct AdminDashboardView {
    pub flashes: Vec<FlashMessage>,
    pub packages: Vec<Package>,
    pub leads: Vec<Lead>,
}

/// Form body for the status update.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatusUpdateRequest {
    pub status: String,
}

#[get("/dashboard")]
pub async fn admin_dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<AdminDashboardView>> {
    let AdminDashboardSnapshot { packages, leads } = state.admin_dashboard.snapshot().await?;
    Ok(web::Json(AdminDashboardView {
        flashes: session.take_flashes(),
        packages,
        leads,
    }))
}

/// Overwrite a package's status.
///
/// Any non-blank label is stored; unknown packages yield `404`.
#[post("/update_status/{package_id}")]
pub async fn update_status(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    form: web::Form<StatusUpdateRequest>,
) -> ApiResult<HttpResponse> {
    let id = PackageId::new(path.into_inner());
    let status = PackageStatus::new(&form.status).map_err(|err| invalid_field("status", err))?;
    state.package_status.update_status(id, &status).await?;
    session.push_flash(FlashLevel::Success, copy::STATUS_UPDATED)?;
    Ok(see_other("/admin/dashboard"))
}
