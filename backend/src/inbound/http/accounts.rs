//! Business account handlers.
//!
//! ```text
//! POST /register   email=..&company_name=..&password=..
//! POST /login      email=..&password=..   (query: next=/admin/dashboard)
//! GET  /logout
//! GET  /dashboard
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::account_service::INVALID_CREDENTIALS;
use crate::domain::{
    Error, ErrorCode, LoginCredentials, Registration, RegistrationValidationError, User,
    UserValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::invalid_field;
use crate::inbound::http::flash::{FlashLevel, FlashMessage, copy};
use crate::inbound::http::redirect::{login_url_for, safe_next, see_other};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::middleware::RequireLogin;

/// Form body for `POST /register`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub email: String,
    pub company_name: String,
    pub password: String,
}

/// Form body for `POST /login`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Query for `POST /login`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

/// Signed-in account overview.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub flashes: Vec<FlashMessage>,
    pub account: User,
}

fn map_registration_validation_error(err: RegistrationValidationError) -> Error {
    let field = match &err {
        RegistrationValidationError::Account(
            UserValidationError::EmptyEmail
            | UserValidationError::EmailTooLong { .. }
            | UserValidationError::InvalidEmail,
        ) => "email",
        RegistrationValidationError::Account(
            UserValidationError::EmptyCompanyName | UserValidationError::CompanyNameTooLong { .. },
        ) => "company_name",
        RegistrationValidationError::EmptyPassword => "password",
    };
    invalid_field(field, err)
}

/// Open a business account, then send the user to the login form.
///
/// An email that is already registered is reported with a flash rather than
/// an error payload.
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration =
        Registration::try_from_parts(&form.email, &form.company_name, &form.password)
            .map_err(map_registration_validation_error)?;
    match state.registration.register(&registration).await {
        Ok(_) => session.push_flash(FlashLevel::Success, copy::REGISTERED)?,
        Err(err) if err.code() == ErrorCode::Conflict => {
            session.push_flash(FlashLevel::Warning, copy::EMAIL_TAKEN)?;
        }
        Err(err) => return Err(err),
    }
    Ok(see_other("/login"))
}

/// Authenticate and start a session.
///
/// Every credential failure, including blank fields, produces the same
/// flash so callers cannot probe which accounts exist.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<LoginQuery>,
    form: web::Form<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let outcome = match LoginCredentials::try_from_parts(&form.email, &form.password) {
        Ok(credentials) => state.login.authenticate(&credentials).await,
        Err(err) => Err(Error::unauthorized(err.to_string())),
    };
    match outcome {
        Ok(user_id) => {
            session.persist_user(user_id)?;
            info!(%user_id, "login succeeded");
            Ok(see_other(safe_next(query.next.as_deref())))
        }
        Err(err) if err.code() == ErrorCode::Unauthorized => {
            session.push_flash(FlashLevel::Error, INVALID_CREDENTIALS)?;
            Ok(see_other("/login"))
        }
        Err(err) => Err(err),
    }
}

#[get("/logout", wrap = "RequireLogin")]
pub async fn logout(session: SessionContext) -> ApiResult<HttpResponse> {
    session.reset();
    session.push_flash(FlashLevel::Info, copy::LOGGED_OUT)?;
    Ok(see_other("/"))
}

/// Profile of the signed-in account.
///
/// A session pointing at a deleted account is cleared and sent back to the
/// login form.
#[get("/dashboard", wrap = "RequireLogin")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    match state.profile.fetch_profile(user_id).await {
        Ok(account) => Ok(HttpResponse::Ok().json(DashboardView {
            flashes: session.take_flashes(),
            account,
        })),
        Err(err) if err.code() == ErrorCode::NotFound => {
            session.reset();
            session.push_flash(FlashLevel::Info, copy::LOGIN_REQUIRED)?;
            Ok(see_other(&login_url_for("/dashboard")))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
