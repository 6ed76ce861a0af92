//! Response bodies shared by several handlers.

use serde::Serialize;

/// `{ "message": ... }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "teams": [...] }` body used by every roster read.
#[derive(Debug, Serialize)]
pub struct TeamsResponse {
    pub teams: Vec<String>,
}
