//! One-time user notifications carried across redirects in the session.

use serde::{Deserialize, Serialize};

/// Session key holding the pending flash queue.
pub(crate) const FLASH_KEY: &str = "_flash";

/// Severity of a flash message, used by clients for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A single flash message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    /// Build a message at the given level.
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// User-facing copy shared by handlers and tests.
pub mod copy {
    pub const TRACKING_NOT_FOUND: &str = "מספר מעקב לא נמצא";
    pub const LEAD_RECEIVED: &str = "תודה רבה! נציג יחזור אליך בהקדם לפתיחת חשבון עסקי.";
    pub const STATUS_UPDATED: &str = "סטטוס חבילה עודכן בהצלחה";
    pub const EMAIL_TAKEN: &str = "This email is already registered. Please log in.";
    pub const REGISTERED: &str = "Account created. You can now log in.";
    pub const LOGGED_OUT: &str = "You have been logged out.";
    pub const LOGIN_REQUIRED: &str = "Please log in to access this page.";
}
