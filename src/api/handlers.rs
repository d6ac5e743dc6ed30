//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

/// Service name reported by the root endpoint.
pub const SERVICE_NAME: &str = "profiles-api";

/// Application state shared with handlers.
///
/// Holds the build identifier resolved once at startup. Nothing here is
/// mutable, so handlers share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Build identifier of the deployed revision.
    pub sha: Arc<str>,
}

impl AppState {
    /// Create new app state from the resolved build identifier.
    pub fn new(sha: &str) -> Self {
        Self {
            sha: Arc::from(sha),
        }
    }
}

/// Liveness check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Service name.
    pub service: &'static str,
    /// Build identifier of the deployed revision.
    pub sha: String,
}

/// Liveness probe handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Root handler - returns the service name and deployed build identifier.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(RootResponse {
        service: SERVICE_NAME,
        sha: state.sha.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn app_state_holds_resolved_sha() {
        let state = AppState::new("deadbeef");
        assert_eq!(&*state.sha, "deadbeef");

        let clone = state.clone();
        assert_eq!(&*clone.sha, "deadbeef");
    }

    #[test]
    fn health_response_serializes_to_exact_body() {
        let body = serde_json::to_string(&HealthResponse { status: "ok" }).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[test]
    fn root_response_serializes_service_then_sha() {
        let body = serde_json::to_string(&RootResponse {
            service: SERVICE_NAME,
            sha: "abc123".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"service":"profiles-api","sha":"abc123"}"#);
    }
}
