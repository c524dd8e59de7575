//! HTTP-Tests fuer /api/auth/*

mod common;

use axum::http::{Method, StatusCode};
use common::{fallback_app, get, post, senden, sqlite_app};
use serde_json::json;

#[tokio::test]
async fn signup_login_me_mit_sqlite() {
    let app = sqlite_app().await;

    let (status, body) = post(
        &app,
        "/api/auth/signup",
        r#"{"email":"dr@x.com","password":"pw","role":"doctor","profile":{"name":"Dr X"}}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], "dr@x.com");
    assert_eq!(body["user"]["role"], "doctor");
    assert_eq!(body["user"]["profile"], json!({ "name": "Dr X" }));
    assert!(body["user"].get("password_hash").is_none());
    let id = body["user"]["id"].as_str().unwrap().to_string();

    let (status, body) = post(
        &app,
        "/api/auth/login",
        r#"{"email":"dr@x.com","password":"pw"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();
    assert_eq!(body["user"]["id"], id.as_str());

    let (status, body) = get(&app, "/api/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], id.as_str());
    assert_eq!(body["user"]["email"], "dr@x.com");
}

#[tokio::test]
async fn signup_ohne_backend_funktioniert() {
    let app = fallback_app();
    let (status, body) = post(
        &app,
        "/api/auth/signup",
        r#"{"email":"a@b.com","password":"pw"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["role"], "doctor");
    assert_eq!(body["user"]["profile"], json!({}));

    let token = body["token"].as_str().unwrap().to_string();
    let (status, _) = get(&app, "/api/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn doppelte_email_ergibt_409() {
    let app = sqlite_app().await;
    let body = r#"{"email":"a@b.com","password":"pw"}"#;
    assert_eq!(post(&app, "/api/auth/signup", body).await.0, StatusCode::CREATED);

    let (status, antwort) = post(&app, "/api/auth/signup", body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(antwort, json!({ "error": "user already exists" }));
}

#[tokio::test]
async fn fehlende_felder_ergeben_400() {
    let app = fallback_app();

    let (status, body) = post(&app, "/api/auth/login", r#"{"email":"a@b.com"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "email and password required" }));

    let (status, _) = post(&app, "/api/auth/signup", r#"{"password":"pw"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn leerer_oder_kaputter_body_ergibt_400() {
    let app = fallback_app();

    let (status, _) = senden(&app, Method::POST, "/api/auth/login", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&app, "/api/auth/signup", "{kein json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn falsches_passwort_und_unbekannte_email_sind_gleich() {
    let app = sqlite_app().await;
    post(&app, "/api/auth/signup", r#"{"email":"a@b.com","password":"pw"}"#).await;

    let falsch = post(&app, "/api/auth/login", r#"{"email":"a@b.com","password":"nein"}"#).await;
    let unbekannt = post(&app, "/api/auth/login", r#"{"email":"x@y.com","password":"pw"}"#).await;

    assert_eq!(falsch.0, StatusCode::UNAUTHORIZED);
    assert_eq!(falsch, unbekannt);
    assert_eq!(falsch.1, json!({ "error": "invalid credentials" }));
}

#[tokio::test]
async fn me_ohne_oder_mit_kaputtem_token() {
    let app = fallback_app();

    let (status, body) = get(&app, "/api/auth/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "missing token" }));

    let (status, body) = get(&app, "/api/auth/me", Some("kein.gueltiger.token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "invalid token" }));
}

#[tokio::test]
async fn logout_ist_immer_ok() {
    let app = fallback_app();
    let (status, body) = senden(&app, Method::POST, "/api/auth/logout", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn organisation_signup_verknuepft_profil() {
    let app = sqlite_app().await;
    let (status, body) = post(
        &app,
        "/api/auth/signup",
        r#"{"email":"h@b.com","password":"pw","role":"organization","profile":{"organization":"General Hospital B"}}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let org_id = body["user"]["profile"]["organizationId"]
        .as_str()
        .unwrap()
        .to_string();

    let (_, liste) = get(&app, "/api/organizations", None).await;
    let eintraege = liste["organizations"].as_array().unwrap();
    assert!(eintraege
        .iter()
        .any(|e| e["id"] == org_id.as_str() && e["name"] == "General Hospital B"));

    let token = body["token"].as_str().unwrap().to_string();
    let (_, me) = get(&app, "/api/auth/me", Some(&token)).await;
    assert_eq!(me["user"]["profile"]["organizationId"], org_id.as_str());
}
