//! # healthsync-observability
//!
//! Observability-Crate fuer HealthSync:
//! - Structured Logging (Text oder JSON) via tracing-subscriber
//! - Health-Check-Endpunkt (`/health`)

pub mod health;
pub mod logging;

pub use health::{health_router, HealthResponse, HealthState, HealthStatus};
pub use logging::{logging_initialisieren, LogEinstellungen, LogFormat, LoggingFehler};
