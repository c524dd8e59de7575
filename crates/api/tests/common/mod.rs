//! Gemeinsame Helfer fuer die HTTP-Tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use healthsync_api::{router, AppState};
use healthsync_auth::{
    HashKosten, IdentitaetsService, OrganisationsVerzeichnis, PasswortHasher, TokenAussteller,
};
use healthsync_db::{Datenspeicher, SqliteDb};
use serde_json::Value;
use tower::ServiceExt;

pub const GEHEIMNIS: &str = "http-test-geheimnis";

fn guenstiger_hasher() -> PasswortHasher {
    PasswortHasher::neu(HashKosten {
        speicher_kib: 8,
        iterationen: 1,
        parallelitaet: 1,
    })
    .unwrap()
}

pub fn app_mit(speicher: Datenspeicher) -> Router {
    let speicher = Arc::new(speicher);
    let identitaet = IdentitaetsService::neu(
        speicher.clone(),
        speicher.clone(),
        guenstiger_hasher(),
        TokenAussteller::neu(GEHEIMNIS),
    );
    let verzeichnis = OrganisationsVerzeichnis::neu(speicher);
    router(AppState::neu(Arc::new(identitaet), Arc::new(verzeichnis)))
}

/// App ohne dauerhaftes Backend
pub fn fallback_app() -> Router {
    app_mit(Datenspeicher::nur_fallback())
}

/// App mit SQLite im Arbeitsspeicher
pub async fn sqlite_app() -> Router {
    let db = SqliteDb::in_memory().await.unwrap();
    app_mit(Datenspeicher::mit_verbindung(db))
}

pub async fn senden(
    app: &Router,
    methode: Method,
    pfad: &str,
    body: Option<&str>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut anfrage = Request::builder().method(methode).uri(pfad);
    if body.is_some() {
        anfrage = anfrage.header(header::CONTENT_TYPE, "application/json");
    }
    if let Some(t) = token {
        anfrage = anfrage.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    let anfrage = anfrage
        .body(Body::from(body.unwrap_or_default().to_string()))
        .unwrap();

    let antwort = app.clone().oneshot(anfrage).await.unwrap();
    let status = antwort.status();
    let bytes = axum::body::to_bytes(antwort.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn post(app: &Router, pfad: &str, body: &str) -> (StatusCode, Value) {
    senden(app, Method::POST, pfad, Some(body), None).await
}

pub async fn get(app: &Router, pfad: &str, token: Option<&str>) -> (StatusCode, Value) {
    senden(app, Method::GET, pfad, None, token).await
}
