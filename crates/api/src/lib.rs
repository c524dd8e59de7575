//! healthsync-api – HTTP-Anbindung fuer HealthSync
//!
//! Stellt die Identitaets-Operationen und die Organisationsliste als
//! JSON-API unter `/api/...` bereit. Die Fachlogik liegt vollstaendig in
//! `healthsync-auth`; dieses Crate uebersetzt nur Anfragen und Fehler.

pub mod rest;

pub use rest::{router, AppState, Identitaet, RestServer, RestServerKonfig};
