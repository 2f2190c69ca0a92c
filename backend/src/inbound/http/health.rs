//! Health endpoint reporting whether the relational store answers queries.
//!
//! ```text
//! GET /api/health
//! ```

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use tracing::warn;

use crate::inbound::http::state::HttpState;

/// Health payload. `error` is present only when the store is unreachable.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    fn healthy() -> Self {
        Self {
            status: "healthy",
            database: "connected",
            error: None,
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy",
            database: "disconnected",
            error: Some(error),
        }
    }
}

/// Run `SELECT 1` through the pool. `200` when it succeeds, `500` otherwise.
#[get("/health")]
pub async fn health(state: web::Data<HttpState>) -> HttpResponse {
    let (mut response, body) = match state.store_probe.ping().await {
        Ok(()) => (HttpResponse::Ok(), HealthResponse::healthy()),
        Err(error) => {
            warn!(%error, "health check failed");
            (
                HttpResponse::InternalServerError(),
                HealthResponse::unhealthy(error.to_string()),
            )
        }
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::StoreProbeError;
    use crate::inbound::http::test_utils::{MockPorts, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn reports_healthy_store() {
        let mut ports = MockPorts::default();
        ports.store_probe.expect_ping().times(1).return_once(|| Ok(()));
        let app = test::init_service(test_app(ports)).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"status": "healthy", "database": "connected"}));
    }

    #[actix_web::test]
    async fn reports_unreachable_store() {
        let mut ports = MockPorts::default();
        ports
            .store_probe
            .expect_ping()
            .return_once(|| Err(StoreProbeError::unavailable("connection refused")));
        let app = test::init_service(test_app(ports)).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            res.headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({
                "status": "unhealthy",
                "database": "disconnected",
                "error": "connection refused",
            })
        );
    }
}
