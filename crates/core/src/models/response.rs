use serde::{Deserialize, Serialize};

/// Uniform `{ success, message }` body for submissions and rejections.
/// The client renders the message verbatim, so `success: false` with 200
/// is a domain outcome (slot already taken), not a transport error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    pub fn granted(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}
