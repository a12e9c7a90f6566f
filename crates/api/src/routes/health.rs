//! Health check endpoint.

use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// `YYYY-MM-DDTHH:mm:ss.sssZ`, UTC with millisecond precision.
    pub timestamp: String,
}

impl HealthResponse {
    /// Builds the payload for the given instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            status: "ok",
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// GET /health — returns liveness status and the current server time.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse::at(Utc::now()))
}
