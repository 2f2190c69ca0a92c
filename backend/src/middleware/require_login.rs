//! Login gate for protected routes.
//!
//! Requests without a user id in the session are answered with a `303`
//! redirect to `/login?next=<original path and query>` and never reach the
//! wrapped service.

use std::task::{Context, Poll};

use actix_session::SessionExt;
use actix_web::Error;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, warn};

use crate::inbound::http::flash::{FlashLevel, copy};
use crate::inbound::http::redirect::{login_url_for, see_other};
use crate::inbound::http::session::SessionContext;

/// Middleware redirecting anonymous requests to the login form.
///
/// Must sit inside the session middleware.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use wedelivery::middleware::RequireLogin;
///
/// let app = App::new().service(web::scope("/admin").wrap(RequireLogin));
/// ```
#[derive(Clone, Copy, Default)]
pub struct RequireLogin;

impl<S, B> Transform<S, ServiceRequest> for RequireLogin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireLoginMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireLoginMiddleware { service }))
    }
}

/// Service wrapper produced by [`RequireLogin`].
pub struct RequireLoginMiddleware<S> {
    service: S,
}

fn original_target(req: &ServiceRequest) -> String {
    match req.query_string() {
        "" => req.path().to_owned(),
        query => format!("{}?{query}", req.path()),
    }
}

impl<S, B> Service<ServiceRequest> for RequireLoginMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let session = SessionContext::new(req.get_session());
        if session.user_id().is_some() {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
        }

        let target = original_target(&req);
        debug!(%target, "redirecting anonymous request to login");
        if let Err(error) = session.push_flash(FlashLevel::Info, copy::LOGIN_REQUIRED) {
            warn!(%error, "failed to queue login flash");
        }
        let response = see_other(&login_url_for(&target)).map_into_right_body();
        Box::pin(ready(Ok(req.into_response(response))))
    }
}
