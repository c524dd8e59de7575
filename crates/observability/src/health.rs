//! Health-Check-Endpunkt fuer HealthSync
//!
//! Endpoint: `GET /health`
//! Response: JSON mit `ok`, Status, Version, Uptime und Backend-Art

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Status des Health-Checks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    /// Laeuft nur mit In-Process-Fallback, Daten ueberleben keinen Neustart
    Degraded,
}

/// Antwort des Health-Check-Endpunkts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub persistent: bool,
}

/// Geteilter Zustand fuer den Health-Check-Handler
#[derive(Clone)]
pub struct HealthState {
    start_time: Arc<Instant>,
    persistent: bool,
}

impl HealthState {
    pub fn neu(persistent: bool) -> Self {
        Self {
            start_time: Arc::new(Instant::now()),
            persistent,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn antwort(&self) -> HealthResponse {
        let status = if self.persistent {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        };
        HealthResponse {
            ok: true,
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.uptime_seconds(),
            persistent: self.persistent,
        }
    }
}

/// Axum-Router fuer den `/health`-Endpunkt
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// `GET /health` – 200 auch bei degraded (Probe soll nicht failen)
async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.antwort()))
}
