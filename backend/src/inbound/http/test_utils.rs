//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::test::TestRequest;
use actix_web::{App, web};

use crate::domain::ports::{
    MockAccountProfileQuery, MockAdminDashboardQuery, MockLeadIntakeCommand, MockLoginService,
    MockPackageStatusCommand, MockPackageTrackingQuery, MockRegistrationService, MockStoreProbe,
};
use crate::domain::UserId;
use crate::inbound::http::routes;
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Build a cookie-session middleware with a fresh key and an insecure
/// `session` cookie suitable for plain-HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the session cookie set by a response.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// `Location` header of a redirect response.
pub fn location<B>(res: &ServiceResponse<B>) -> &str {
    res.headers()
        .get(header::LOCATION)
        .expect("redirect location")
        .to_str()
        .expect("ascii location")
}

/// Mocked driving ports. Unconfigured mocks panic when called, so a test
/// only sets expectations on the ports its handler should touch.
#[derive(Default)]
pub struct MockPorts {
    pub login: MockLoginService,
    pub registration: MockRegistrationService,
    pub profile: MockAccountProfileQuery,
    pub tracking: MockPackageTrackingQuery,
    pub package_status: MockPackageStatusCommand,
    pub leads: MockLeadIntakeCommand,
    pub admin_dashboard: MockAdminDashboardQuery,
    pub store_probe: MockStoreProbe,
}

impl MockPorts {
    /// Accept any credentials as the given account.
    pub fn with_login(mut self, user_id: i32) -> Self {
        self.login
            .expect_authenticate()
            .returning(move |_| Ok(UserId::new(user_id)));
        self
    }

    /// Wrap the mocks into handler state.
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            login: Arc::new(self.login),
            registration: Arc::new(self.registration),
            profile: Arc::new(self.profile),
            tracking: Arc::new(self.tracking),
            package_status: Arc::new(self.package_status),
            leads: Arc::new(self.leads),
            admin_dashboard: Arc::new(self.admin_dashboard),
            store_probe: Arc::new(self.store_probe),
        })
    }
}

/// Full route table over mocked ports, behind a test session middleware.
pub fn test_app(
    ports: MockPorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .configure(routes::configure)
        .wrap(test_session_middleware())
}

/// Form login used to obtain an authenticated session cookie.
pub fn login_request() -> TestRequest {
    TestRequest::post()
        .uri("/login")
        .set_form([("email", "shop@example.com"), ("password", "s3cret")])
}
