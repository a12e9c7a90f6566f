//! Service descriptor served at the root path.

use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "トクノリレンタカー API";
pub const SERVICE_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            name: SERVICE_NAME,
            version: SERVICE_VERSION,
            status: "running",
        }
    }
}

/// GET / — returns the service name, version and run state.
pub async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}
