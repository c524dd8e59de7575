//! REST-Handler fuer Anmeldung, Registrierung und Sitzung

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use healthsync_auth::{AnmeldeAnfrage, RegistrierungsAnfrage};
use serde_json::json;

use crate::rest::middleware::{auth_fehler_antwort, authorization, body_lesen};
use crate::rest::AppState;

/// POST /api/auth/login
pub async fn login(State(state): State<AppState>, body: Bytes) -> Response {
    let anfrage: AnmeldeAnfrage = body_lesen(&body);
    match state.identitaet.anmelden(anfrage).await {
        Ok(anmeldung) => (StatusCode::OK, Json(anmeldung)).into_response(),
        Err(e) => auth_fehler_antwort(&e, "login failed"),
    }
}

/// POST /api/auth/signup
pub async fn signup(State(state): State<AppState>, body: Bytes) -> Response {
    let anfrage: RegistrierungsAnfrage = body_lesen(&body);
    match state.identitaet.registrieren(anfrage).await {
        Ok(anmeldung) => (StatusCode::CREATED, Json(anmeldung)).into_response(),
        Err(e) => auth_fehler_antwort(&e, "signup failed"),
    }
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match state.identitaet.wer_bin_ich(authorization(&headers)).await {
        Ok(user) => (StatusCode::OK, Json(json!({ "user": user }))).into_response(),
        Err(e) => auth_fehler_antwort(&e, "failed to load user"),
    }
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>) -> Response {
    state.identitaet.abmelden();
    (StatusCode::OK, Json(json!({ "ok": true }))).into_response()
}
