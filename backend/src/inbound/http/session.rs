//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers deal in user ids and flash messages
//! rather than raw keys.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use super::flash::{FLASH_KEY, FlashLevel, FlashMessage};
use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's id, rotating the session cookie.
    pub fn persist_user(&self, user_id: UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.as_i32())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current user id from the session, if present.
    ///
    /// Undecodable values are treated as logged out.
    pub fn user_id(&self) -> Option<UserId> {
        match self.0.get::<i32>(USER_ID_KEY) {
            Ok(id) => id.map(UserId::new),
            Err(error) => {
                warn!(%error, "invalid user id in session cookie");
                None
            }
        }
    }

    /// Require an authenticated user id or return `401 Unauthorized`.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop every session entry and rotate the cookie.
    ///
    /// Unlike `Session::purge`, flashes queued afterwards still reach the
    /// client.
    pub fn reset(&self) {
        self.0.clear();
        self.0.renew();
    }

    /// Queue a flash message for the next view.
    pub fn push_flash(&self, level: FlashLevel, message: impl Into<String>) -> Result<(), Error> {
        let mut queue = self.pending_flashes();
        queue.push(FlashMessage::new(level, message));
        self.0
            .insert(FLASH_KEY, queue)
            .map_err(|error| Error::internal(format!("failed to store flash message: {error}")))
    }

    /// Remove and return all pending flash messages.
    pub fn take_flashes(&self) -> Vec<FlashMessage> {
        let queue = self.pending_flashes();
        if !queue.is_empty() {
            self.0.remove(FLASH_KEY);
        }
        queue
    }

    fn pending_flashes(&self) -> Vec<FlashMessage> {
        match self.0.get::<Vec<FlashMessage>>(FLASH_KEY) {
            Ok(queue) => queue.unwrap_or_default(),
            Err(error) => {
                warn!(%error, "discarding undecodable flash queue");
                Vec::new()
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
