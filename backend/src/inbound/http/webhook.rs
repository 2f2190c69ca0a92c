//! Order webhook. Acknowledges any JSON body without persisting it.
//!
//! ```text
//! POST /api/v1/webhook {"order_id": 42}
//! ```

use actix_web::{post, web};
use serde::Serialize;
use tracing::info;

/// Acknowledgement returned for every accepted payload.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub status: &'static str,
    pub message: &'static str,
}

#[post("/webhook")]
pub async fn webhook(payload: web::Json<serde_json::Value>) -> web::Json<WebhookAck> {
    info!(payload = %payload.0, "webhook received");
    web::Json(WebhookAck {
        status: "received",
        message: "Order processed successfully (Simulation)",
    })
}
