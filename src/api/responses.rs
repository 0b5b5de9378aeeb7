//! API response structures.

use serde::{Deserialize, Serialize};

use crate::types::TimerSession;

/// Response for timer control endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub status: String,
    pub message: String,
    pub session: TimerSession,
}

impl TimerResponse {
    /// Creates a success response around the current session.
    pub fn ok(message: impl Into<String>, session: TimerSession) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
            session,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

impl HealthResponse {
    /// Creates a healthy response.
    pub fn ok(uptime_seconds: u64) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds,
        }
    }
}
