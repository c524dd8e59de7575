//! Route-Definitionen fuer die REST-API (/api/...)

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::rest::{handlers, AppState};

/// Maximale Groesse eines Request-Bodys: 5 MiB
pub const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// Erstellt den /api-Router mit Body-Limit und Request-Tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        // Identitaet
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/signup", post(handlers::auth::signup))
        .route("/api/auth/me", get(handlers::auth::me))
        .route("/api/auth/logout", post(handlers::auth::logout))
        // Organisationen
        .route(
            "/api/organizations",
            get(handlers::organizations::list_organizations),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
