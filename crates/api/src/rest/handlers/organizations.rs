//! REST-Handler fuer Organisationen

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::rest::AppState;

/// GET /api/organizations
pub async fn list_organizations(State(state): State<AppState>) -> Response {
    let organisationen = state.verzeichnis.auflisten().await;
    (
        StatusCode::OK,
        Json(json!({ "organizations": organisationen })),
    )
        .into_response()
}
