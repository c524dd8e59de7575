//! Hilfsfunktionen fuer Anfragen und Fehlerantworten

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use healthsync_auth::AuthError;
use serde::de::DeserializeOwned;
use serde_json::json;

/// Fehlerantwort `{"error": "<meldung>"}`
pub fn fehler_antwort(status: StatusCode, nachricht: &str) -> Response {
    (status, Json(json!({ "error": nachricht }))).into_response()
}

/// Uebersetzt einen Service-Fehler in eine HTTP-Antwort
///
/// Unerwartete Fehler werden protokolliert und nur mit der
/// operationsspezifischen Meldung beantwortet.
pub fn auth_fehler_antwort(fehler: &AuthError, meldung_bei_500: &str) -> Response {
    let status =
        StatusCode::from_u16(fehler.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    match fehler.oeffentliche_meldung() {
        Some(meldung) => fehler_antwort(status, &meldung),
        None => {
            tracing::error!(fehler = %fehler, "{meldung_bei_500}");
            fehler_antwort(StatusCode::INTERNAL_SERVER_ERROR, meldung_bei_500)
        }
    }
}

/// Liest einen JSON-Body; fehlende oder ungueltige Bodies zaehlen als leer
pub fn body_lesen<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    if body.is_empty() {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!(fehler = %e, "Ungueltiger JSON-Body, behandle als leer");
        T::default()
    })
}

/// Rohwert des Authorization-Headers
pub fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
}
